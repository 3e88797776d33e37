// Rust guideline compliant 2026-02-06

//! Error types for the hookrun core library.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hookrun operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Position of a manifest entry, used to point at validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the repository entry (0-based).
    pub repo: Option<usize>,
    /// Index of the hook within its repository entry (0-based).
    pub hook: Option<usize>,
}

impl Location {
    /// Location of the manifest as a whole.
    pub fn manifest() -> Self {
        Self {
            repo: None,
            hook: None,
        }
    }

    /// Location of a repository entry.
    pub fn repo(repo: usize) -> Self {
        Self {
            repo: Some(repo),
            hook: None,
        }
    }

    /// Location of a hook entry inside a repository entry.
    pub fn hook(repo: usize, hook: usize) -> Self {
        Self {
            repo: Some(repo),
            hook: Some(hook),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.repo, self.hook) {
            (Some(repo), Some(hook)) => write!(f, "repos[{}].hooks[{}]", repo, hook),
            (Some(repo), None) => write!(f, "repos[{}]", repo),
            _ => write!(f, "manifest"),
        }
    }
}

/// Error types for hookrun operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest file does not exist.
    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Manifest text is malformed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Manifest violates a schema invariant.
    #[error("Validation error at {location}: {message}")]
    Validation {
        /// Offending entry.
        location: Location,
        /// Human-readable description of the violation.
        message: String,
    },

    /// Invalid runner configuration.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(String),
}

impl Error {
    /// Shorthand for building a validation error.
    pub fn validation(location: Location, message: impl Into<String>) -> Self {
        Error::Validation {
            location,
            message: message.into(),
        }
    }
}
