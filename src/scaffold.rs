//! End-to-end scaffold run: resolve, write, install, report.

use std::path::PathBuf;

use log::debug;

use crate::catalog::Catalog;
use crate::config::ScaffoldRequest;
use crate::error::{Error, Result};
use crate::installer::{plan, CommandRunner, Installer};
use crate::processor::{ensure_output_dir, materialize, MaterializeReport};
use crate::renderer::TemplateRenderer;

/// Switches of one scaffold run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Write into an existing, non-empty project directory
    pub force: bool,
    /// Write the files but do not run the Go toolchain
    pub skip_install: bool,
    /// Only print what would be written and run
    pub dry_run: bool,
}

/// Prints every file that could not be written.
fn report_failures(report: &MaterializeReport) {
    for (path, cause) in &report.failed {
        eprintln!("Not written: '{}': {}", path.display(), cause);
    }
}

/// Generates the project described by `request`.
///
/// # Flow
/// 1. Resolves every template, failing before any file is touched
/// 2. Prints the plan and stops, on a dry run
/// 3. Writes the project tree, recording per-file failures
/// 4. Prints the files that could not be written
/// 5. Runs the Go toolchain commands unless install is skipped or the
///    project root could not be created
///
/// # Returns
/// * `PathBuf` - Root of the generated project
///
/// # Errors
/// * `Error::InvalidConfiguration` / `Error::MinijinjaError` if a template cannot be resolved
/// * `Error::OutputDirectoryExistsError` if the project directory is not empty and `force` is off
/// * `Error::CommandExecutionError` for the first failing install command
/// * `Error::IncompleteScaffold` if any file could not be written
pub fn scaffold(
    request: &ScaffoldRequest,
    renderer: &dyn TemplateRenderer,
    runner: &dyn CommandRunner,
    options: ScaffoldOptions,
) -> Result<PathBuf> {
    let file_specs = Catalog::new(renderer).file_specs(request)?;

    if options.dry_run {
        for spec in &file_specs {
            let target = request.project_path.join(&spec.relative_path);
            println!("Would create: '{}'", target.display());
        }
        if !options.skip_install {
            for command in plan(request) {
                println!("Would run: {command}");
            }
        }
        return Ok(request.project_path.clone());
    }

    let project_path = ensure_output_dir(&request.project_path, options.force)?;
    let report = materialize(&project_path, &file_specs);
    for path in &report.created {
        println!("Created file: '{}'", path.display());
    }
    report_failures(&report);

    let incomplete = Error::IncompleteScaffold {
        failed: report.failed.len(),
    };

    if !project_path.is_dir() {
        debug!("Project root {} is missing, skipping install", project_path.display());
        return Err(incomplete);
    }

    if !options.skip_install {
        Installer::new(runner).install(request)?;
    }

    if !report.is_complete() {
        return Err(incomplete);
    }
    Ok(project_path)
}
