// Rust guideline compliant 2026-02-06

//! Hookrun Runner
//!
//! This crate executes a planned run:
//! - Subprocess execution of each unit with timeout and cancellation
//! - Aggregation of per-unit outcomes into a run verdict
//! - The sequential run driver and its JSON report

pub mod aggregate;
pub mod executor;
pub mod runner;

pub use aggregate::{Outcome, RunResult, RunSummary, Verdict};
pub use executor::HookExecutor;
pub use runner::{RunReport, Runner};
