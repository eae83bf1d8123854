use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use upgradeql_testkit::{CheckResult, load_test_cases_from_str, run_case};

mod error_presentation;

use error_presentation::{CliError, CliResult, render_runtime_error};

/// Checks upgrade-definition semantic manifests: aggregates each case's task
/// tree and compares the result against the expected SQL per dialect.
#[derive(Debug, Parser)]
#[command(name = "upgradeql", version)]
struct Cli {
    /// YAML manifest files of named semantic cases.
    #[arg(required = true, value_name = "MANIFEST")]
    manifests: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match check_manifests(&cli.manifests) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{}", render_runtime_error(error));
            ExitCode::FAILURE
        }
    }
}

fn check_manifests(manifests: &[PathBuf]) -> CliResult<bool> {
    let mut all_passed = true;

    for path in manifests {
        let yaml = fs::read_to_string(path).map_err(|source| CliError::ReadManifest {
            path: path.clone(),
            source,
        })?;
        let cases = load_test_cases_from_str(&yaml).map_err(|source| CliError::ParseManifest {
            path: path.clone(),
            message: source.to_string(),
        })?;

        for (case_name, case) in cases {
            match run_case(&case) {
                CheckResult::Passed => println!("ok {}::{case_name}", path.display()),
                CheckResult::Skipped(reason) => {
                    println!("skipped {}::{case_name}: {reason}", path.display());
                }
                CheckResult::Failed(message) => {
                    all_passed = false;
                    println!("FAILED {}::{case_name}\n{message}", path.display());
                }
            }
        }
    }

    Ok(all_passed)
}
