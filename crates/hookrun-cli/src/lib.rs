// Rust guideline compliant 2026-02-06

//! Hookrun CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod git;
pub mod logging;
pub mod output;
pub mod progress;
pub mod signals;
pub mod terminal;
pub mod workspace;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color};
pub use workspace::{FileSelection, Workspace};
