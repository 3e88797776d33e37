// Rust guideline compliant 2026-02-06

//! Live progress lines while hooks run.

use hookrun_runner::RunResult;

/// Prints one line per finished unit to stderr.
pub struct ProgressReporter {
    total: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Creates a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `total` - Number of units in the plan
    /// * `enabled` - Whether anything is printed
    pub fn new(total: usize, enabled: bool) -> Self {
        Self { total, enabled }
    }

    /// Reports a finished unit.
    ///
    /// # Arguments
    ///
    /// * `current` - 1-based position of the unit
    /// * `result` - The unit's result
    pub fn report(&self, current: usize, result: &RunResult) {
        if self.enabled {
            eprintln!("{}", self.line(current, result));
        }
    }

    fn line(&self, current: usize, result: &RunResult) -> String {
        let label = if result.skipped {
            "Skipped"
        } else {
            result.outcome.label()
        };
        format!("[{}/{}] {}: {}", current, self.total, result.name, label)
    }
}
