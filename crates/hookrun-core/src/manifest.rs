// Rust guideline compliant 2026-02-06

//! Hook manifest data model and loader.
//!
//! A manifest is a YAML document with a top-level `repos` sequence. Each
//! repository entry names a source locator, a pinned revision and an ordered
//! list of hooks:
//!
//! ```yaml
//! exclude: ^vendor/
//! repos:
//!   - repo: https://github.com/pre-commit/pre-commit-hooks
//!     rev: v4.5.0
//!     hooks:
//!       - id: trailing-whitespace
//!       - id: mixed-line-ending
//!         args: [--fix=lf]
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A parsed hook manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Repository entries in declaration order.
    #[serde(default)]
    pub repos: Vec<RepoEntry>,

    /// Global exclusion pattern applied to hooks without their own `exclude`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Stop scheduling units after the first failing one.
    #[serde(default)]
    pub fail_fast: bool,
}

/// One repository of hooks, pinned at a revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Source locator, usually a URL.
    #[serde(default)]
    pub repo: String,

    /// Pinned revision.
    #[serde(default)]
    pub rev: String,

    /// Hooks in declaration order.
    #[serde(default)]
    pub hooks: Vec<HookEntry>,
}

/// A single hook declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HookEntry {
    /// Hook identifier, unique within its repository entry.
    #[serde(default)]
    pub id: String,

    /// Extra arguments passed before the file list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command line of the executable. Defaults to the hook id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Include pattern for candidate files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Hook-local exclusion pattern; replaces the global one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Whether the filtered file set is appended to the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,

    /// Run even when no file matches.
    #[serde(default)]
    pub always_run: bool,

    /// Declares the hook a fixer that rewrites files in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<bool>,

    /// Any other keys, kept verbatim.
    #[serde(flatten)]
    pub overrides: BTreeMap<String, serde_yaml::Value>,
}

impl Manifest {
    /// Loads a manifest from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`NotFound`)
    /// - The file cannot be read (`Io`)
    /// - The document is malformed (`Parse`)
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_yaml_str(&content)
            .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(
            path = %path.display(),
            repos = manifest.repos.len(),
            hooks = manifest.hook_count(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parses a manifest from YAML text.
    ///
    /// Unknown top-level keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error when the text is not a well-formed manifest.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Total number of hook entries across all repositories.
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|repo| repo.hooks.len()).sum()
    }
}

impl HookEntry {
    /// Creates a hook entry with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Name shown in reports.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether the hook rewrites files in place.
    ///
    /// An explicit `fix` key wins; otherwise any `--fix` style argument marks
    /// the hook as a fixer.
    pub fn is_fixer(&self) -> bool {
        self.fix
            .unwrap_or_else(|| self.args.iter().any(|arg| arg.starts_with("--fix")))
    }

    /// Whether file paths are appended to the command line.
    pub fn passes_filenames(&self) -> bool {
        self.pass_filenames.unwrap_or(true)
    }

    /// Splits `entry` (or the id) into program and leading arguments.
    ///
    /// # Errors
    ///
    /// Returns a message when the entry has unbalanced quotes or no words.
    pub fn command_words(&self) -> std::result::Result<Vec<String>, String> {
        let Some(entry) = &self.entry else {
            return Ok(vec![self.id.clone()]);
        };
        let words = shell_words::split(entry)
            .map_err(|e| format!("entry '{}' cannot be parsed: {}", entry, e))?;
        if words.is_empty() {
            return Err("entry cannot be empty".to_string());
        }
        Ok(words)
    }
}
