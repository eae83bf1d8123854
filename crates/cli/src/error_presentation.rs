use std::{io, path::PathBuf};

use miette::Report;

const MANIFEST_READ_CONTEXT: &str = "while reading semantic manifest";
const MANIFEST_PARSE_CONTEXT: &str = "while parsing semantic manifest";

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    ReadManifest {
        path: PathBuf,
        source: io::Error,
    },
    ParseManifest {
        path: PathBuf,
        message: String,
    },
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::ReadManifest { path, source } => {
            let context = format!("{MANIFEST_READ_CONTEXT} `{}`", path.display());
            let report = report_with_context(source, context);
            format!("[io] {report}")
        }
        CliError::ParseManifest { path, message } => {
            let report = miette::miette!(
                "{MANIFEST_PARSE_CONTEXT} `{}`: {message}",
                path.display()
            );
            format!("[manifest] {report}")
        }
    }
}

fn report_with_context<E>(source: E, context: String) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
{
    let contextualized = anyhow::Error::new(source).context(context);
    miette::miette!("{contextualized:#}")
}
