// Rust guideline compliant 2026-02-09

//! Implementation of the `hookrun validate` command.

use crate::output::OutputFormatter;
use crate::workspace::Workspace;
use anyhow::Result;

/// Loads and validates the manifest without running anything.
///
/// # Errors
///
/// Returns the first loader or validation error.
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<i32> {
    let manifest = workspace.load_manifest()?;
    println!("{}", formatter.format_validation(&manifest));
    Ok(0)
}
