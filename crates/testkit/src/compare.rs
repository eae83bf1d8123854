use upgradeql_core::{DatabaseKind, SqlStatement, StatementError};

/// Outcome of checking one dialect of an aggregated statement, or of a whole
/// semantic case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed,
    Skipped(String),
    Failed(String),
}

/// Compares an aggregated statement against a hand-written expectation,
/// dialect by dialect.
///
/// A dialect absent from `expected` is vacuously satisfied and reported as
/// [`CheckResult::Skipped`], so expectations may be written for only the
/// dialects under test. A dialect absent from `actual` that `expected` does
/// cover is a real failure and propagates as the error. Texts are compared
/// byte for byte, with no whitespace or case normalization.
pub fn compare_statements(
    actual: &SqlStatement,
    expected: &SqlStatement,
) -> Result<Vec<(DatabaseKind, CheckResult)>, StatementError> {
    let mut results = Vec::with_capacity(DatabaseKind::ALL.len());

    for kind in DatabaseKind::ALL {
        let expected_sql = match expected.get(kind) {
            Ok(sql) => sql,
            Err(StatementError::MissingDialect { .. }) => {
                results.push((
                    kind,
                    CheckResult::Skipped(format!("no expectation for dialect '{kind}'")),
                ));
                continue;
            }
            Err(error) => return Err(error),
        };

        let actual_sql = actual.get(kind)?;
        if actual_sql == expected_sql {
            results.push((kind, CheckResult::Passed));
        } else {
            results.push((
                kind,
                CheckResult::Failed(format!(
                    "dialect '{kind}' SQL mismatch; expected:\n{expected_sql}\nactual:\n{actual_sql}"
                )),
            ));
        }
    }

    Ok(results)
}
