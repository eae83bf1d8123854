use upgradeql_core::{DatabaseKind, SqlStatement, StatementError, aggregate};
use upgradeql_testkit::{CheckResult, compare_statements, raw_leaf_fixture};

fn statement(entries: &[(&str, &str)]) -> SqlStatement {
    SqlStatement::from_named(entries.iter().copied()).expect("fixture names are canonical")
}

fn result_for(
    results: &[(DatabaseKind, CheckResult)],
    kind: DatabaseKind,
) -> &CheckResult {
    results
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, result)| result)
        .unwrap_or_else(|| panic!("no verdict recorded for dialect '{kind}'"))
}

#[test]
fn dialects_absent_from_the_expectation_are_vacuously_satisfied() {
    let actual = statement(&[("oracle", "A"), ("mssql", "B"), ("postgres", "C")]);
    let expected = statement(&[("postgres", "C")]);

    let results = compare_statements(&actual, &expected).expect("actual covers every dialect");

    assert!(matches!(
        result_for(&results, DatabaseKind::Oracle),
        CheckResult::Skipped(_)
    ));
    assert!(matches!(
        result_for(&results, DatabaseKind::MsSql),
        CheckResult::Skipped(_)
    ));
    assert_eq!(result_for(&results, DatabaseKind::Postgres), &CheckResult::Passed);
}

#[test]
fn matching_text_passes_per_dialect() {
    let actual = statement(&[("oracle", "A;B"), ("postgres", "A;B")]);
    let expected = statement(&[("oracle", "A;B"), ("postgres", "A;B")]);

    let results = compare_statements(&actual, &expected).expect("actual covers expected dialects");

    assert_eq!(result_for(&results, DatabaseKind::Oracle), &CheckResult::Passed);
    assert_eq!(result_for(&results, DatabaseKind::Postgres), &CheckResult::Passed);
}

#[test]
fn comparison_is_byte_exact_with_no_normalization() {
    let actual = statement(&[("postgres", "SELECT 1")]);
    let expected = statement(&[("postgres", "select 1")]);

    let results = compare_statements(&actual, &expected).expect("lookup succeeds on both sides");

    let CheckResult::Failed(message) = result_for(&results, DatabaseKind::Postgres) else {
        panic!("casing difference must fail the comparison");
    };
    assert!(message.contains("SELECT 1") && message.contains("select 1"));
}

#[test]
fn trailing_whitespace_is_significant() {
    let actual = statement(&[("mssql", "SELECT 1 ")]);
    let expected = statement(&[("mssql", "SELECT 1")]);

    let results = compare_statements(&actual, &expected).expect("lookup succeeds on both sides");

    assert!(matches!(
        result_for(&results, DatabaseKind::MsSql),
        CheckResult::Failed(_)
    ));
}

#[test]
fn aggregated_output_satisfies_a_subset_expectation() {
    let actual = aggregate(&[
        raw_leaf_fixture("drop", "DROP TABLE legacy"),
        raw_leaf_fixture("vacuum", "TRUNCATE TABLE audit"),
    ]);
    let expected = statement(&[("mssql", "DROP TABLE legacy;TRUNCATE TABLE audit")]);

    let results = compare_statements(&actual, &expected).expect("aggregate covers every dialect");

    assert!(
        results
            .iter()
            .all(|(_, result)| !matches!(result, CheckResult::Failed(_))),
        "no dialect may fail: {results:?}"
    );
}

#[test]
fn missing_actual_dialect_propagates_instead_of_skipping() {
    let actual = statement(&[("postgres", "A")]);
    let expected = statement(&[("oracle", "A")]);

    let error = compare_statements(&actual, &expected)
        .expect_err("an expectation the actual side cannot answer is a real failure");

    assert_eq!(
        error,
        StatementError::MissingDialect {
            dialect: DatabaseKind::Oracle
        }
    );
}
