use crate::SqlStatement;

/// One node of a parsed upgrade definition: a task name plus its positional
/// arguments. Aggregation dispatches on the first argument only; the rest are
/// carried for the owning framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNode {
    pub name: String,
    pub args: Vec<TaskArg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskArg {
    /// Directly carried SQL; marks a leaf task.
    Statement(SqlStatement),
    /// Nested tasks; marks a composite (grouping) task.
    Tasks(Vec<TaskNode>),
    /// Any other positional argument; contributes no SQL.
    Text(String),
}

impl TaskNode {
    #[must_use]
    pub fn leaf(name: impl Into<String>, statement: SqlStatement) -> Self {
        Self {
            name: name.into(),
            args: vec![TaskArg::Statement(statement)],
        }
    }

    #[must_use]
    pub fn group(name: impl Into<String>, children: Vec<TaskNode>) -> Self {
        Self {
            name: name.into(),
            args: vec![TaskArg::Tasks(children)],
        }
    }

    /// A task with no arguments at all.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args(name: impl Into<String>, args: Vec<TaskArg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The argument aggregation dispatches on.
    #[must_use]
    pub fn payload(&self) -> Option<&TaskArg> {
        self.args.first()
    }
}
