//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::manifest::Manifest;
use crate::runner::{self, ConsoleReporter, ProcessExecutor};

use super::{CliError, CliResult, ExitCode};

/// Execute the configured suite and map the summary onto an exit code.
///
/// Per-item failures are folded into the summary and the exit code; only
/// configuration and environment failures surface as errors.
pub fn run_suite(manifest_path: &Path, verbose: bool) -> CliResult<ExitCode> {
    let manifest = load(manifest_path)?;
    let items = manifest.resolve_items();

    let Some((program, args)) = manifest.command.split_first() else {
        return Err(CliError::failure("manifest command must name an interpreter"));
    };
    let executor = ProcessExecutor::new(program, args.to_vec());
    let mut reporter = ConsoleReporter::new(verbose);

    let summary = runner::run(&items, &executor, &mut reporter)
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    if summary.all_succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Failures were already rendered in the summary - exit nonzero
        // without repeating them
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Print the configured examples and whether each entry point resolves.
pub fn list_suite(manifest_path: &Path) -> CliResult<ExitCode> {
    let manifest = load(manifest_path)?;

    println!("suite root: {}", manifest.root.display());
    println!("entry point: {}", manifest.entry_point);
    println!("command: {}", manifest.command.join(" "));
    println!();

    for item in manifest.resolve_items() {
        let status = if item.entry_point.is_file() {
            "ok"
        } else {
            "missing entry point"
        };
        println!("  {} ({})", item.name, status);
    }

    Ok(ExitCode::SUCCESS)
}

fn load(path: &Path) -> CliResult<Manifest> {
    Manifest::load(path).map_err(|e| CliError::failure(format!("Error: {}", e)))
}
