use std::{collections::BTreeMap, path::Path};

use crate::{
    DatabaseKind,
    error::{ScriptError, StatementError},
};

/// An immutable bundle of SQL text keyed by database kind.
///
/// A kind that was never supplied fails lookup with
/// [`StatementError::MissingDialect`]; an empty string is a real value and
/// does not. Callers rely on the distinction to tell "no SQL for this
/// dialect" apart from "empty SQL".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlStatement {
    texts: BTreeMap<DatabaseKind, String>,
}

impl SqlStatement {
    #[must_use]
    pub fn new(texts: BTreeMap<DatabaseKind, String>) -> Self {
        Self { texts }
    }

    /// Builds a statement from dialect-name keys, validating every name
    /// against the closed [`DatabaseKind`] set.
    pub fn from_named<I, K, V>(entries: I) -> Result<Self, StatementError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut texts = BTreeMap::new();
        for (name, sql) in entries {
            let kind = DatabaseKind::from_name(name.as_ref())?;
            texts.insert(kind, sql.into());
        }

        Ok(Self { texts })
    }

    /// The same SQL for every known dialect.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        let sql = sql.into();
        Self {
            texts: DatabaseKind::ALL
                .into_iter()
                .map(|kind| (kind, sql.clone()))
                .collect(),
        }
    }

    /// Loads the named script for every known dialect from
    /// `<scripts_root>/<dialect>/<script_name>`.
    pub fn from_scripts(scripts_root: &Path, script_name: &str) -> Result<Self, ScriptError> {
        let mut texts = BTreeMap::new();
        for kind in DatabaseKind::ALL {
            texts.insert(kind, kind.load_script(scripts_root, script_name)?);
        }

        Ok(Self { texts })
    }

    pub fn get(&self, kind: DatabaseKind) -> Result<&str, StatementError> {
        self.texts
            .get(&kind)
            .map(String::as_str)
            .ok_or(StatementError::MissingDialect { dialect: kind })
    }

    /// The kinds this statement carries SQL for, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = DatabaseKind> + '_ {
        self.texts.keys().copied()
    }
}
