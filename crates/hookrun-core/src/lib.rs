// Rust guideline compliant 2026-02-06

//! Hookrun Core Library
//!
//! This crate provides the foundational components for the hookrun manifest runner:
//! - Data models (Manifest, RepoEntry, HookEntry)
//! - Manifest loading and fail-fast validation
//! - Execution planning (ordered units with filtered file sets)
//! - Runner settings and cancellation
//! - Error types and result handling

pub mod cancel;
pub mod config;
pub mod error;
pub mod manifest;
pub mod planner;
pub mod validate;

pub use cancel::CancelToken;
pub use config::{Config, OutputFormat};
pub use error::{Error, Location, Result};
pub use manifest::{HookEntry, Manifest, RepoEntry};
pub use planner::{plan, ExecutionUnit, Plan};
pub use validate::validate;
