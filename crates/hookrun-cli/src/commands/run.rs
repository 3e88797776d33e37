// Rust guideline compliant 2026-02-09

//! Implementation of the `hookrun run` command.

use crate::output::OutputFormatter;
use crate::progress::ProgressReporter;
use crate::terminal::print_warning;
use crate::workspace::{FileSelection, Workspace};
use anyhow::Result;
use hookrun_core::{plan, CancelToken};
use hookrun_runner::Runner;
use std::path::PathBuf;

/// Options of a single `run` invocation.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Candidate files.
    pub selection: Option<FileSelection>,
    /// Only run the hook with this id.
    pub hook: Option<String>,
    /// Write the JSON report here.
    pub report: Option<PathBuf>,
    /// Print live progress to stderr.
    pub progress: bool,
}

/// Executes the run command.
///
/// # Arguments
///
/// * `workspace` - Workspace root and settings
/// * `args` - Command options
/// * `formatter` - Output formatter for the final report
/// * `cancel` - Interrupt flag
///
/// # Returns
///
/// The process exit code derived from the run verdict.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest is missing, malformed or invalid
/// - Candidate files cannot be listed
/// - The hook filter matches nothing
pub fn execute(
    workspace: &Workspace,
    args: RunArgs,
    formatter: &dyn OutputFormatter,
    cancel: &CancelToken,
) -> Result<i32> {
    let manifest = workspace.load_manifest()?;
    let selection = args.selection.unwrap_or(FileSelection::Staged);
    let files = workspace.candidate_files(&selection)?;

    let mut plan = plan(&manifest, &files)?;
    if let Some(id) = &args.hook {
        plan.retain_hook(id)?;
    }

    let runner = Runner::new(&workspace.root)
        .with_timeout(workspace.config.timeout())
        .with_fail_fast(workspace.config.fail_fast);
    let progress = ProgressReporter::new(plan.len(), args.progress);
    let report = runner.run_with_observer(&plan, cancel, |current, result| {
        progress.report(current, result)
    });

    println!("{}", formatter.format_report(&report));

    if let Some(path) = &args.report {
        if let Err(err) = report.write_json(path) {
            print_warning(&format!("Failed to write report to {}: {}", path.display(), err));
        }
    }

    Ok(report.summary.exit_code())
}
