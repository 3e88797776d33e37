// Rust guideline compliant 2026-02-09

//! Workspace context shared by CLI commands.

use crate::git;
use anyhow::Result;
use hookrun_core::{validate, Config, Manifest};
use std::path::{Path, PathBuf};

/// Which files a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// Every file tracked in the git index.
    AllFiles,
    /// Files given on the command line, used as-is.
    Explicit(Vec<PathBuf>),
    /// Files staged in the git index relative to HEAD.
    Staged,
}

impl FileSelection {
    /// Builds a selection from the `--all-files` flag and positional paths.
    pub fn from_args(all_files: bool, files: Vec<PathBuf>) -> Self {
        if all_files {
            FileSelection::AllFiles
        } else if !files.is_empty() {
            FileSelection::Explicit(files)
        } else {
            FileSelection::Staged
        }
    }
}

/// Workspace root plus effective runner settings.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory hooks run in; file paths are relative to it.
    pub root: PathBuf,
    /// Effective configuration.
    pub config: Config,
}

impl Workspace {
    /// Creates a workspace context.
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Finds the workspace root for a process started in `cwd`.
    ///
    /// The root is the enclosing Git working tree, or `cwd` itself outside
    /// a repository.
    pub fn discover_root(cwd: &Path) -> PathBuf {
        git::discover_root(cwd).unwrap_or_else(|| cwd.to_path_buf())
    }

    /// Absolute path of the manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.config.manifest_path)
    }

    /// Loads and validates the manifest.
    ///
    /// # Errors
    ///
    /// Returns the loader or validator error unchanged.
    pub fn load_manifest(&self) -> hookrun_core::Result<Manifest> {
        let manifest = Manifest::load(&self.manifest_path())?;
        validate(&manifest)?;
        Ok(manifest)
    }

    /// Resolves the candidate file list for a run.
    ///
    /// # Errors
    ///
    /// Returns an error if git is needed and the repository cannot be read.
    pub fn candidate_files(&self, selection: &FileSelection) -> Result<Vec<PathBuf>> {
        let files = match selection {
            FileSelection::AllFiles => git::tracked_files(&self.root)?,
            FileSelection::Staged => git::staged_files(&self.root)?,
            FileSelection::Explicit(files) => files.iter().map(|f| relative_to(&self.root, f)).collect(),
        };
        tracing::debug!(count = files.len(), ?selection, "resolved candidate files");
        Ok(files)
    }
}

/// Expresses `file` relative to `root` when it lies inside it.
pub fn relative_to(root: &Path, file: &Path) -> PathBuf {
    file.strip_prefix(root).unwrap_or(file).to_path_buf()
}
