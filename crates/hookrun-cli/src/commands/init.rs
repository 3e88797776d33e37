// Rust guideline compliant 2026-02-09

//! Implementation of the `hookrun init` command.

use crate::workspace::Workspace;
use anyhow::{bail, Result};
use hookrun_core::config::CONFIG_FILE_NAME;

/// Writes the effective runner settings to `.hookrun.toml` in the workspace root.
///
/// An existing file is kept unless `force` is set.
///
/// # Errors
///
/// Returns an error if the file exists without `force`, or cannot be written.
pub fn execute(workspace: &Workspace, force: bool) -> Result<i32> {
    let path = workspace.root.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    workspace.config.save(&workspace.root)?;
    tracing::info!(path = %path.display(), "wrote runner settings");
    println!("Wrote {}", path.display());
    Ok(0)
}
