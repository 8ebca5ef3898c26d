//! Debug logging support for hexsed
//!
//! When debug mode is enabled via config, parse and edit events are logged to
//! a file. Nothing is ever logged to stdout or stderr, which carry the edited
//! bytes and diagnostics.

use crate::config::{self, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Initialize the debug logging system
///
/// Returns the path to the log file, or None if logging is not enabled or
/// the log file could not be opened.
pub fn init_debug_logging(settings: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !settings.debug {
        return Ok(None);
    }

    let opened = get_log_path(settings)
        .and_then(|log_path| open_log_file(&log_path).map(|file| (log_path, file)));

    match opened {
        Ok((log_path, log_file)) => {
            let subscriber = registry()
                .with(
                    fmt::layer()
                        .with_writer(log_file)
                        .with_ansi(false)
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                )
                .with(EnvFilter::new(filter_directive(settings)));

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

            Ok(Some(log_path))
        }
        Err(e) => {
            // Logging is optional, an edit must still go through
            eprintln!("Warning: Could not create log file: {:#}", e);
            Ok(None)
        }
    }
}

/// Create the log directory if needed and open the log file for appending
fn open_log_file(log_path: &Path) -> Result<File> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))
}

fn filter_directive(settings: &LoggingConfig) -> String {
    format!("hexsed={}", settings.level.to_lowercase())
}

/// Get the log file path, from config or ~/.hexsed/hexsed.log
fn get_log_path(settings: &LoggingConfig) -> Result<PathBuf> {
    match &settings.log_file {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(config::config_dir()?.join("hexsed.log")),
    }
}
