use std::collections::BTreeMap;

use crate::{DatabaseKind, SqlStatement, TaskArg, TaskNode};

/// Flattens a task tree into one SQL string per known dialect.
///
/// The walk is level-by-level rather than a plain pre-order descent: every
/// leaf of the current level is concatenated first, then the children of all
/// composites at that level, combined in encounter order, become the next
/// level. Sibling composites therefore share one linear left-to-right
/// ordering, and a leaf placed after a composite still lands before the
/// composite's children.
///
/// The result covers every [`DatabaseKind`], with an empty string for kinds
/// no leaf contributed to. Unrecognized argument shapes are skipped, so a
/// tree without SQL-producing leaves aggregates to all-empty rather than an
/// error.
#[must_use]
pub fn aggregate(tasks: &[TaskNode]) -> SqlStatement {
    let mut accumulator: BTreeMap<DatabaseKind, String> = DatabaseKind::ALL
        .into_iter()
        .map(|kind| (kind, String::new()))
        .collect();

    let mut level: Vec<&TaskNode> = tasks.iter().collect();
    while !level.is_empty() {
        let mut pending = Vec::new();

        for task in level {
            match task.payload() {
                Some(TaskArg::Statement(statement)) => {
                    append_statement(&mut accumulator, statement);
                }
                Some(TaskArg::Tasks(children)) => pending.extend(children.iter()),
                Some(TaskArg::Text(_)) | None => {}
            }
        }

        level = pending;
    }

    SqlStatement::new(accumulator)
}

fn append_statement(accumulator: &mut BTreeMap<DatabaseKind, String>, statement: &SqlStatement) {
    for (kind, text) in accumulator.iter_mut() {
        // A statement with no mapping for this kind contributes nothing.
        let Ok(sql) = statement.get(*kind) else {
            continue;
        };

        if text.is_empty() {
            text.push_str(sql);
        } else {
            text.push(';');
            text.push_str(sql);
        }
    }
}
