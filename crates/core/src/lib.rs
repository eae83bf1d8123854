mod aggregate;
mod dialect;
mod error;
mod statement;
mod task;

pub use aggregate::aggregate;
pub use dialect::DatabaseKind;
pub use error::{Error, Result, ScriptError, StatementError};
pub use statement::SqlStatement;
pub use task::{TaskArg, TaskNode};
