// Rust guideline compliant 2026-02-06

//! Runner settings for hookrun.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Name of the settings file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".hookrun.toml";

/// Manifest file used when nothing else is configured.
pub const DEFAULT_MANIFEST_PATH: &str = ".pre-commit-config.yaml";

/// Upper bound for the per-unit timeout (24 hours).
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug"];

/// Output format for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// One dotted line per hook.
    Plain,
}

impl OutputFormat {
    /// Parses a format name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// Configuration for runner behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the hook manifest, relative to the workspace root.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Per-unit timeout in seconds. Zero disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,

    /// Default output format for reports.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Stop scheduling units after the first failure.
    #[serde(default)]
    pub fail_fast: bool,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_manifest_path() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            timeout_secs: 0,
            output_format: OutputFormat::default(),
            fail_fast: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.hookrun.toml`
    /// 3. Environment variables with `HOOKRUN_` prefix
    ///
    /// # Arguments
    ///
    /// * `root` - Workspace root containing `.hookrun.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], reading overrides through `env` instead of the
    /// process environment.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HOOKRUN_MANIFEST` - Manifest path
    /// - `HOOKRUN_TIMEOUT_SECS` - Per-unit timeout in seconds
    /// - `HOOKRUN_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `HOOKRUN_FAIL_FAST` - Stop after first failure (true/false)
    /// - `HOOKRUN_LOG_LEVEL` - Log level
    fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("HOOKRUN_MANIFEST") {
            self.manifest_path = val;
        }

        if let Some(val) = env("HOOKRUN_TIMEOUT_SECS") {
            self.timeout_secs = val.parse().map_err(|_| {
                Error::Config("HOOKRUN_TIMEOUT_SECS must be a non-negative number".to_string())
            })?;
        }

        if let Some(val) = env("HOOKRUN_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                Error::Config("HOOKRUN_OUTPUT_FORMAT must be json, table, or plain".to_string())
            })?;
        }

        if let Some(val) = env("HOOKRUN_FAIL_FAST") {
            self.fail_fast = val
                .parse()
                .map_err(|_| Error::Config("HOOKRUN_FAIL_FAST must be true or false".to_string()))?;
        }

        if let Some(val) = env("HOOKRUN_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - manifest_path is empty
    /// - timeout_secs exceeds 24 hours
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.manifest_path.trim().is_empty() {
            return Err(Error::Config("manifest_path cannot be empty".to_string()));
        }

        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(Error::Config(format!(
                "timeout_secs must be at most {}, got {}",
                MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the per-unit timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Saves the configuration to `.hookrun.toml` under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, root: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(root.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}
