// Rust guideline compliant 2026-02-07

//! Per-unit results and their aggregation into a run verdict.

use hookrun_core::ExecutionUnit;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Classification of one unit's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The tool exited with status 0.
    Passed,
    /// The tool ran and reported failure.
    Failed,
    /// The tool could not be launched or exceeded its timeout.
    ToolError,
    /// The tool was killed because the run was interrupted.
    Cancelled,
}

impl Outcome {
    /// Whether this outcome fails the run.
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::Failed | Outcome::ToolError)
    }

    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Passed => "Passed",
            Outcome::Failed => "Failed",
            Outcome::ToolError => "Error",
            Outcome::Cancelled => "Cancelled",
        }
    }
}

/// Result of executing one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Index of the owning repository entry.
    pub repo_index: usize,
    /// Index of the hook inside its repository entry.
    pub hook_index: usize,
    /// Hook identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Outcome classification.
    pub outcome: Outcome,
    /// Process exit code, when the process exited normally.
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr, verbatim.
    pub output: String,
    /// Wall-clock time spent on the unit.
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Number of the unit's files whose content changed while it ran.
    pub modified_files: usize,
    /// No process was started because there was nothing to check.
    pub skipped: bool,
}

impl RunResult {
    /// Builds a result for `unit` with empty output.
    pub fn new(unit: &ExecutionUnit, outcome: Outcome) -> Self {
        Self {
            repo_index: unit.repo_index,
            hook_index: unit.hook_index,
            id: unit.id.clone(),
            name: unit.name.clone(),
            outcome,
            exit_code: None,
            output: String::new(),
            duration: Duration::ZERO,
            modified_files: 0,
            skipped: false,
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Overall verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every unit passed.
    Pass,
    /// At least one unit failed or errored.
    Fail,
    /// The run was interrupted.
    Cancelled,
}

/// Aggregate counts and verdict for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Units that produced a result.
    pub total: usize,
    /// Units that passed (including skipped ones).
    pub passed: usize,
    /// Units whose tool reported failure.
    pub failed: usize,
    /// Units whose tool could not run.
    pub errored: usize,
    /// Units that passed without starting a process.
    pub skipped: usize,
    /// Scheduling stopped early after the first failure.
    pub short_circuited: bool,
    /// Overall verdict.
    pub verdict: Verdict,
}

impl RunSummary {
    /// Aggregates per-unit results.
    ///
    /// # Arguments
    ///
    /// * `results` - Results in execution order
    /// * `short_circuited` - Whether units were left unscheduled after a failure
    /// * `interrupted` - Whether an external interrupt stopped the run
    pub fn from_results(results: &[RunResult], short_circuited: bool, interrupted: bool) -> Self {
        let count = |outcome: Outcome| results.iter().filter(|r| r.outcome == outcome).count();
        let passed = count(Outcome::Passed);
        let failed = count(Outcome::Failed);
        let errored = count(Outcome::ToolError);
        let skipped = results.iter().filter(|r| r.skipped).count();

        let verdict = if interrupted || count(Outcome::Cancelled) > 0 {
            Verdict::Cancelled
        } else if failed + errored > 0 {
            Verdict::Fail
        } else {
            Verdict::Pass
        };

        Self {
            total: results.len(),
            passed,
            failed,
            errored,
            skipped,
            short_circuited,
            verdict,
        }
    }

    /// Process exit code for this summary.
    ///
    /// 0 on pass, 1 when hooks failed, 2 when any tool could not run, 130 when cancelled.
    pub fn exit_code(&self) -> i32 {
        match self.verdict {
            Verdict::Pass => 0,
            Verdict::Fail if self.errored > 0 => 2,
            Verdict::Fail => 1,
            Verdict::Cancelled => 130,
        }
    }
}
