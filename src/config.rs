//! Configuration management for hexsed
//!
//! hexsed reads optional settings from ~/.hexsed/config.toml. The file is
//! never created implicitly; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// hexsed configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Debug logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Always report the number of edits, as if -n were given
    #[serde(default)]
    pub report_count: bool,

    /// Color diagnostics when stderr is a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_count: false,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a debug log file
    #[serde(default)]
    pub debug: bool,

    /// Level for the hexsed tracing target
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file location (default: ~/.hexsed/hexsed.log)
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: default_level(),
            log_file: None,
        }
    }
}

// Default functions for serde
fn default_color() -> bool { true }
fn default_level() -> String { "info".to_string() }

/// Directory holding the config and default log file
pub fn config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home_dir.join(".hexsed"))
}

/// Get the configuration file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config> {
    let config_path = config_file_path()?;
    load_config_from(&config_path)
}

/// Load configuration from `config_path`
///
/// A missing file yields defaults. A malformed or invalid file is reported
/// on stderr and also yields defaults, so a bad config never blocks an edit.
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = match toml::from_str(&config_str) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Ignoring malformed config {}: {}", config_path.display(), e);
            return Ok(Config::default());
        }
    };

    if let Err(e) = validate_config(&config) {
        eprintln!("Warning: Ignoring invalid config {}: {}", config_path.display(), e);
        return Ok(Config::default());
    }

    Ok(config)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        anyhow::bail!(
            "Invalid level: {} (must be one of {})",
            config.logging.level,
            LOG_LEVELS.join(", ")
        );
    }

    if let Some(log_file) = &config.logging.log_file {
        if log_file.trim().is_empty() {
            anyhow::bail!("Invalid log_file: must not be empty");
        }
    }

    Ok(())
}
