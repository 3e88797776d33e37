// Rust guideline compliant 2026-02-06

//! Manifest schema validation.
//!
//! Validation is fail-fast: entries are visited in declaration order and the
//! first violation is returned together with its location.

use crate::{Error, HookEntry, Location, Manifest, Result};
use regex::Regex;
use std::collections::HashSet;

/// Validates a manifest.
///
/// # Arguments
///
/// * `manifest` - The manifest to check
///
/// # Returns
///
/// Ok if every invariant holds.
///
/// # Errors
///
/// Returns `Error::Validation` for the first of:
/// - The manifest has no repository entries
/// - A repository entry has an empty locator or revision
/// - A repository entry has no hooks
/// - A hook id is empty or repeated within its repository entry
/// - The global `exclude` pattern does not compile
/// - A hook's `files`/`exclude` pattern does not compile or its `entry` is unusable
pub fn validate(manifest: &Manifest) -> Result<()> {
    if manifest.repos.is_empty() {
        return Err(Error::validation(
            Location::manifest(),
            "manifest must declare at least one repo",
        ));
    }

    for (repo_idx, repo) in manifest.repos.iter().enumerate() {
        let location = Location::repo(repo_idx);

        if repo.repo.trim().is_empty() {
            return Err(Error::validation(location, "repo cannot be empty"));
        }

        if repo.rev.trim().is_empty() {
            return Err(Error::validation(
                location,
                format!("rev is required for '{}'", repo.repo),
            ));
        }

        if repo.hooks.is_empty() {
            return Err(Error::validation(
                location,
                format!("'{}' must declare at least one hook", repo.repo),
            ));
        }

        let mut seen = HashSet::new();
        for (hook_idx, hook) in repo.hooks.iter().enumerate() {
            let location = Location::hook(repo_idx, hook_idx);
            if hook.id.trim().is_empty() {
                return Err(Error::validation(location, "hook id cannot be empty"));
            }
            if !seen.insert(hook.id.as_str()) {
                return Err(Error::validation(
                    location,
                    format!("duplicate hook id '{}'", hook.id),
                ));
            }
            validate_hook(hook, location)?;
        }
    }

    if let Some(pattern) = &manifest.exclude {
        compile_pattern(pattern, "exclude", Location::manifest())?;
    }

    Ok(())
}

fn validate_hook(hook: &HookEntry, location: Location) -> Result<()> {
    if let Some(pattern) = &hook.files {
        compile_pattern(pattern, "files", location)?;
    }
    if let Some(pattern) = &hook.exclude {
        compile_pattern(pattern, "exclude", location)?;
    }
    hook.command_words()
        .map_err(|message| Error::validation(location, message))?;
    Ok(())
}

/// Compiles a manifest pattern, mapping failures to a validation error.
pub(crate) fn compile_pattern(pattern: &str, key: &str, location: Location) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::validation(location, format!("{} pattern '{}' is invalid: {}", key, pattern, e))
    })
}
