// Rust guideline compliant 2026-02-07

//! Sequential run driver.
//!
//! Units run one at a time in plan order. Hooks may read and write the same
//! files, so declaration order is the only ordering guarantee and no unit is
//! ever started while another is in flight.

use crate::aggregate::{RunResult, RunSummary};
use crate::executor::HookExecutor;
use chrono::{DateTime, Utc};
use hookrun_core::{CancelToken, Plan};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Report of one run: every executed unit's result plus the summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Results in execution order.
    pub results: Vec<RunResult>,
    /// Aggregate counts and verdict.
    pub summary: RunSummary,
}

impl RunReport {
    /// Writes the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }
}

/// Drives a plan through the executor.
#[derive(Debug, Clone)]
pub struct Runner {
    executor: HookExecutor,
    fail_fast: bool,
}

impl Runner {
    /// Creates a runner for the workspace at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            executor: HookExecutor::new(root),
            fail_fast: false,
        }
    }

    /// Sets the per-unit timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.executor = self.executor.with_timeout(timeout);
        self
    }

    /// Stops after the first failing unit, in addition to the plan's own setting.
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Runs every unit of `plan`.
    pub fn run(&self, plan: &Plan, cancel: &CancelToken) -> RunReport {
        self.run_with_observer(plan, cancel, |_, _| {})
    }

    /// Runs every unit of `plan`, calling `observer` with each result as it completes.
    ///
    /// # Arguments
    ///
    /// * `plan` - Units to run, in order
    /// * `cancel` - Interrupt flag checked before each unit and while it runs
    /// * `observer` - Receives the 1-based position and result of each unit
    pub fn run_with_observer<F>(&self, plan: &Plan, cancel: &CancelToken, mut observer: F) -> RunReport
    where
        F: FnMut(usize, &RunResult),
    {
        let started_at = Utc::now();
        let fail_fast = self.fail_fast || plan.fail_fast;
        let mut results = Vec::with_capacity(plan.len());
        let mut interrupted = false;
        let mut short_circuited = false;

        tracing::info!(units = plan.len(), fail_fast, "starting run");

        for (idx, unit) in plan.units.iter().enumerate() {
            if cancel.is_cancelled() {
                interrupted = true;
                break;
            }

            let result = self.executor.execute(unit, cancel);
            tracing::info!(
                hook = %result.id,
                outcome = result.outcome.label(),
                exit_code = ?result.exit_code,
                modified_files = result.modified_files,
                duration_ms = u64::try_from(result.duration.as_millis()).unwrap_or(u64::MAX),
                "hook finished"
            );
            observer(idx + 1, &result);

            let outcome = result.outcome;
            results.push(result);

            if outcome == crate::Outcome::Cancelled {
                interrupted = true;
                break;
            }
            if fail_fast && outcome.is_failure() {
                short_circuited = idx + 1 < plan.len();
                if short_circuited {
                    tracing::warn!(hook = %unit.id, "fail-fast: skipping remaining hooks");
                }
                break;
            }
        }

        let summary = RunSummary::from_results(&results, short_circuited, interrupted);
        tracing::info!(verdict = ?summary.verdict, total = summary.total, "run finished");

        RunReport {
            started_at,
            results,
            summary,
        }
    }
}
