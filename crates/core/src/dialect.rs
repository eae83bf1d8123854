use std::{fmt, fs, path::Path};

use crate::error::{ScriptError, StatementError};

/// A supported database kind.
///
/// The set is closed: accumulators, comparisons, and raw statements iterate
/// [`DatabaseKind::ALL`] rather than a runtime registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatabaseKind {
    Oracle,
    MsSql,
    Postgres,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 3] = [
        DatabaseKind::Oracle,
        DatabaseKind::MsSql,
        DatabaseKind::Postgres,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DatabaseKind::Oracle => "oracle",
            DatabaseKind::MsSql => "mssql",
            DatabaseKind::Postgres => "postgres",
        }
    }

    /// Resolves a canonical dialect name back to its kind.
    pub fn from_name(name: &str) -> Result<Self, StatementError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| StatementError::UnknownDialect {
                name: name.to_string(),
            })
    }

    /// Reads the SQL script `<scripts_root>/<dialect-name>/<script_name>`.
    pub fn load_script(
        self,
        scripts_root: &Path,
        script_name: &str,
    ) -> Result<String, ScriptError> {
        let path = scripts_root.join(self.name()).join(script_name);
        fs::read_to_string(&path).map_err(|source| ScriptError::NotFound {
            dialect: self,
            path,
            source,
        })
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
