// Rust guideline compliant 2026-02-07

//! Execution planning.
//!
//! Expands a validated manifest into a flat, ordered list of execution units.
//! Order is manifest declaration order, top to bottom, so fixers declared
//! before checkers always run first.

use crate::validate::compile_pattern;
use crate::{Error, Location, Manifest, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One resolved, ready-to-run hook instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionUnit {
    /// Index of the owning repository entry.
    pub repo_index: usize,
    /// Index of the hook inside its repository entry.
    pub hook_index: usize,
    /// Hook identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Source locator of the owning repository entry.
    pub repo: String,
    /// Revision of the owning repository entry.
    pub rev: String,
    /// Executable to launch.
    pub program: String,
    /// Arguments placed before the file list (entry words, then declared args).
    pub args: Vec<String>,
    /// Files this unit operates on, after include/exclude filtering.
    pub files: Vec<PathBuf>,
    /// Whether `files` is appended to the command line.
    pub pass_filenames: bool,
    /// Run even when `files` is empty.
    pub always_run: bool,
    /// Whether the hook rewrites files in place.
    pub fixer: bool,
    /// Unrecognized hook keys, carried for reporting.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, serde_yaml::Value>,
}

impl ExecutionUnit {
    /// Whether the unit has nothing to do and can be reported as passed without running.
    pub fn is_trivial(&self) -> bool {
        self.files.is_empty() && !self.always_run
    }

    /// Full argument vector passed to `program`.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if self.pass_filenames {
            args.extend(self.files.iter().map(|f| f.to_string_lossy().into_owned()));
        }
        args
    }
}

/// Ordered execution plan for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    /// Units in execution order.
    pub units: Vec<ExecutionUnit>,
    /// Stop after the first failing unit.
    pub fail_fast: bool,
}

impl Plan {
    /// Keeps only the units whose hook id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no unit has that id.
    pub fn retain_hook(&mut self, id: &str) -> Result<()> {
        self.units.retain(|unit| unit.id == id);
        if self.units.is_empty() {
            return Err(Error::validation(
                Location::manifest(),
                format!("no hook with id '{}'", id),
            ));
        }
        Ok(())
    }

    /// Number of units in the plan.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if the plan has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Builds the execution plan for a validated manifest.
///
/// # Arguments
///
/// * `manifest` - A manifest that passed [`crate::validate`]
/// * `candidates` - Workspace-relative candidate file paths
///
/// # Returns
///
/// One unit per hook entry, in declaration order.
///
/// # Errors
///
/// Returns a validation error if a pattern or entry cannot be resolved.
pub fn plan(manifest: &Manifest, candidates: &[PathBuf]) -> Result<Plan> {
    let global_exclude = manifest
        .exclude
        .as_deref()
        .map(|p| compile_pattern(p, "exclude", Location::manifest()))
        .transpose()?;

    let mut units = Vec::with_capacity(manifest.hook_count());
    for (repo_index, repo) in manifest.repos.iter().enumerate() {
        for (hook_index, hook) in repo.hooks.iter().enumerate() {
            let location = Location::hook(repo_index, hook_index);

            let include = hook
                .files
                .as_deref()
                .map(|p| compile_pattern(p, "files", location))
                .transpose()?;
            let local_exclude = hook
                .exclude
                .as_deref()
                .map(|p| compile_pattern(p, "exclude", location))
                .transpose()?;
            let exclude = local_exclude.as_ref().or(global_exclude.as_ref());

            let files = filter_files(candidates, include.as_ref(), exclude);

            let mut words = hook
                .command_words()
                .map_err(|message| Error::validation(location, message))?;
            let program = words.remove(0);
            words.extend(hook.args.iter().cloned());

            units.push(ExecutionUnit {
                repo_index,
                hook_index,
                id: hook.id.clone(),
                name: hook.display_name().to_string(),
                repo: repo.repo.clone(),
                rev: repo.rev.clone(),
                program,
                args: words,
                files,
                pass_filenames: hook.passes_filenames(),
                always_run: hook.always_run,
                fixer: hook.is_fixer(),
                overrides: hook.overrides.clone(),
            });
        }
    }

    tracing::debug!(units = units.len(), candidates = candidates.len(), "planned run");

    Ok(Plan {
        units,
        fail_fast: manifest.fail_fast,
    })
}

fn filter_files(
    candidates: &[PathBuf],
    include: Option<&Regex>,
    exclude: Option<&Regex>,
) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|path| {
            let text = match_text(path);
            include.map_or(true, |re| re.is_match(&text))
                && !exclude.map_or(false, |re| re.is_match(&text))
        })
        .cloned()
        .collect()
}

/// Patterns always see `/`-separated paths.
fn match_text(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
