use std::collections::BTreeMap;

use serde::Deserialize;
use upgradeql_core::{SqlStatement, StatementError, TaskArg, TaskNode, aggregate};

use crate::compare::{CheckResult, compare_statements};

/// One named semantic case: a task tree and the SQL expected per dialect.
///
/// `expected` may cover any subset of the known dialects; uncovered dialects
/// are skipped, not failed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestCase {
    pub tasks: Vec<TaskSpec>,
    pub expected: BTreeMap<String, String>,
}

/// One task of a manifest. `sql` marks a leaf, `group` a composite, neither a
/// bare task. When both are present they become positional arguments in field
/// order, and aggregation dispatches on the first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskSpec {
    pub name: Option<String>,
    pub sql: Option<SqlSpec>,
    pub group: Option<Vec<TaskSpec>>,
}

/// SQL carried by a leaf: one text shared by every dialect, or a per-dialect
/// map keyed by canonical dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SqlSpec {
    Raw(String),
    PerDialect(BTreeMap<String, String>),
}

pub fn load_test_cases_from_str(
    yaml: &str,
) -> Result<BTreeMap<String, TestCase>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Builds the task tree a manifest describes. Unknown dialect names in a
/// per-dialect `sql` map fail here, before anything is aggregated.
pub fn build_tasks(specs: &[TaskSpec]) -> Result<Vec<TaskNode>, StatementError> {
    specs.iter().map(build_task).collect()
}

fn build_task(spec: &TaskSpec) -> Result<TaskNode, StatementError> {
    let mut args = Vec::new();

    if let Some(sql) = &spec.sql {
        args.push(TaskArg::Statement(build_statement(sql)?));
    }
    if let Some(group) = &spec.group {
        args.push(TaskArg::Tasks(build_tasks(group)?));
    }

    let name = spec.name.clone().unwrap_or_else(|| "task".to_string());
    Ok(TaskNode::with_args(name, args))
}

fn build_statement(spec: &SqlSpec) -> Result<SqlStatement, StatementError> {
    match spec {
        SqlSpec::Raw(sql) => Ok(SqlStatement::raw(sql)),
        SqlSpec::PerDialect(entries) => SqlStatement::from_named(
            entries.iter().map(|(name, sql)| (name.as_str(), sql.as_str())),
        ),
    }
}

/// Aggregates the case's task tree and checks it against the expectation.
///
/// Collapses the per-dialect verdicts: any failure fails the case with every
/// failing dialect's message; vacuous skips do not.
pub fn run_case(test: &TestCase) -> CheckResult {
    let tasks = match build_tasks(&test.tasks) {
        Ok(tasks) => tasks,
        Err(error) => return CheckResult::Failed(error.to_string()),
    };

    let expected = match SqlStatement::from_named(
        test.expected
            .iter()
            .map(|(name, sql)| (name.as_str(), sql.as_str())),
    ) {
        Ok(expected) => expected,
        Err(error) => return CheckResult::Failed(error.to_string()),
    };

    let actual = aggregate(&tasks);
    let results = match compare_statements(&actual, &expected) {
        Ok(results) => results,
        Err(error) => return CheckResult::Failed(error.to_string()),
    };

    let failures: Vec<String> = results
        .into_iter()
        .filter_map(|(_, result)| match result {
            CheckResult::Failed(message) => Some(message),
            CheckResult::Passed | CheckResult::Skipped(_) => None,
        })
        .collect();

    if failures.is_empty() {
        CheckResult::Passed
    } else {
        CheckResult::Failed(failures.join("\n"))
    }
}
