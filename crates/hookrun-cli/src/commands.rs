// Rust guideline compliant 2026-02-06

//! Command implementations for the hookrun CLI.

pub mod init;
pub mod plan;
pub mod run;
pub mod validate;
