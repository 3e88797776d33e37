// Rust guideline compliant 2026-02-09

//! Implementation of the `hookrun plan` command.

use crate::output::OutputFormatter;
use crate::workspace::{FileSelection, Workspace};
use anyhow::Result;

/// Prints the resolved execution plan.
///
/// # Arguments
///
/// * `workspace` - Workspace root and settings
/// * `selection` - Candidate files
/// * `hook` - Optional hook id filter
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the manifest is invalid or files cannot be listed.
pub fn execute(
    workspace: &Workspace,
    selection: FileSelection,
    hook: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<i32> {
    let manifest = workspace.load_manifest()?;
    let files = workspace.candidate_files(&selection)?;
    let mut plan = hookrun_core::plan(&manifest, &files)?;
    if let Some(id) = &hook {
        plan.retain_hook(id)?;
    }
    println!("{}", formatter.format_plan(&plan));
    Ok(0)
}
