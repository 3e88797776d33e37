// Rust guideline compliant 2026-02-07

//! Hook executor.
//!
//! Runs one execution unit as a subprocess in the workspace root, capturing
//! combined output and classifying the result. Fixers are not re-run; the
//! executor only reports how many files changed.

use crate::aggregate::{Outcome, RunResult};
use hookrun_core::{CancelToken, ExecutionUnit};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Executes units as external processes.
#[derive(Debug, Clone)]
pub struct HookExecutor {
    root: PathBuf,
    timeout: Option<Duration>,
    poll_interval: Duration,
}

enum Waited {
    Exited { code: Option<i32>, output: String },
    TimedOut,
    Cancelled,
}

impl HookExecutor {
    /// Creates an executor that launches processes in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            timeout: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets the per-unit timeout. `None` waits indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs one unit.
    ///
    /// # Arguments
    ///
    /// * `unit` - The unit to run
    /// * `cancel` - Interrupt flag; when set, the child is killed
    ///
    /// # Returns
    ///
    /// The unit's result. Launch failures and timeouts are reported as
    /// [`Outcome::ToolError`], never as an `Err`.
    pub fn execute(&self, unit: &ExecutionUnit, cancel: &CancelToken) -> RunResult {
        let started = Instant::now();

        if unit.is_trivial() {
            tracing::debug!(hook = %unit.id, "no files to check, skipping");
            let mut result = RunResult::new(unit, Outcome::Passed);
            result.skipped = true;
            return result;
        }

        let before = fingerprint(&self.root, &unit.files);
        let args = unit.command_args();
        tracing::debug!(hook = %unit.id, program = %unit.program, ?args, "launching hook");

        let handle = match self.launch(unit, &args) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(hook = %unit.id, program = %unit.program, error = %err, "failed to launch hook");
                let mut result = RunResult::new(unit, Outcome::ToolError);
                result.output = format!("Failed to launch '{}': {}", unit.program, err);
                result.duration = started.elapsed();
                return result;
            }
        };

        let mut result = match self.wait(&handle, cancel) {
            Ok(Waited::Exited { code, output }) => {
                let outcome = if code == Some(0) {
                    Outcome::Passed
                } else {
                    Outcome::Failed
                };
                let mut result = RunResult::new(unit, outcome);
                result.exit_code = code;
                result.output = output;
                result
            }
            Ok(Waited::TimedOut) => {
                let mut result = RunResult::new(unit, Outcome::ToolError);
                let secs = self.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
                result.output = format!("'{}' timed out after {}s and was killed", unit.program, secs);
                result
            }
            Ok(Waited::Cancelled) => {
                let mut result = RunResult::new(unit, Outcome::Cancelled);
                result.output = "Interrupted".to_string();
                result
            }
            Err(err) => {
                let mut result = RunResult::new(unit, Outcome::ToolError);
                result.output = format!("Failed waiting for '{}': {}", unit.program, err);
                result
            }
        };

        let after = fingerprint(&self.root, &unit.files);
        result.modified_files = before
            .iter()
            .zip(after.iter())
            .filter(|(a, b)| a != b)
            .count();
        result.duration = started.elapsed();
        result
    }

    fn launch(&self, unit: &ExecutionUnit, args: &[String]) -> std::io::Result<duct::Handle> {
        let expression = duct::cmd(unit.program.as_str(), args)
            .dir(&self.root)
            .stdin_null()
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked();

        // Each hook leads its own process group so a kill reaches its descendants.
        #[cfg(unix)]
        let expression = expression.before_spawn(|command| {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
            Ok(())
        });

        expression.start()
    }

    fn wait(&self, handle: &duct::Handle, cancel: &CancelToken) -> std::io::Result<Waited> {
        let deadline = self.timeout.map(|t| Instant::now() + t);
        loop {
            if let Some(output) = handle.try_wait()? {
                return Ok(Waited::Exited {
                    code: output.status.code(),
                    output: String::from_utf8_lossy(&output.stdout).into_owned(),
                });
            }
            if cancel.is_cancelled() {
                terminate(handle)?;
                return Ok(Waited::Cancelled);
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                terminate(handle)?;
                return Ok(Waited::TimedOut);
            }
            thread::sleep(self.poll_interval);
        }
    }
}

/// Kills the hook together with every process it started.
fn terminate(handle: &duct::Handle) -> std::io::Result<()> {
    #[cfg(unix)]
    for pid in handle.pids() {
        if let Ok(pgid) = libc::pid_t::try_from(pid) {
            // SAFETY: killpg only sends a signal. The group was created for this
            // hook and its leader is not reaped yet, so the id cannot be reused.
            unsafe {
                libc::killpg(pgid, libc::SIGKILL);
            }
        }
    }
    handle.kill()
}

/// Content digests of `files`, `None` for files that cannot be read.
fn fingerprint(root: &Path, files: &[PathBuf]) -> Vec<Option<Vec<u8>>> {
    files
        .iter()
        .map(|file| {
            std::fs::read(root.join(file))
                .ok()
                .map(|content| Sha256::digest(&content).to_vec())
        })
        .collect()
}
