use std::{io, path::PathBuf};

use thiserror::Error;

use crate::DatabaseKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("unknown dialect name '{name}'")]
    UnknownDialect { name: String },

    /// The statement was never told about this dialect. Distinct from an
    /// empty-string mapping, which is a real value.
    #[error("no sql mapped for dialect '{dialect}'")]
    MissingDialect { dialect: DatabaseKind },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script '{}' not found for dialect '{dialect}'", .path.display())]
    NotFound {
        dialect: DatabaseKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

pub type Result<T> = std::result::Result<T, Error>;
