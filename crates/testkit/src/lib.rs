use upgradeql_core::{SqlStatement, TaskNode};

mod compare;
mod yaml_runner;

pub use compare::{CheckResult, compare_statements};
pub use yaml_runner::{
    SqlSpec, TaskSpec, TestCase, build_tasks, load_test_cases_from_str, run_case,
};

/// A leaf task carrying the same SQL for every dialect, for quick fixtures.
pub fn raw_leaf_fixture(name: &str, sql: &str) -> TaskNode {
    TaskNode::leaf(name, SqlStatement::raw(sql))
}
