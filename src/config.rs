//! JSON-backed configuration for the logging facility.
//!
//! Configuration is an explicitly constructed value handed to the logger
//! at startup; nothing here reads environment variables or mutates global
//! state. Every field has a default, so a partial (or absent) config file
//! still yields a usable setup.

use crate::logger::LogLevel;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// File name appended to the default directory.
pub const LOG_FILE_NAME: &str = "Application.log";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum severity that will be written.
    pub level: LogLevel,
    /// Absolute path of the append-only log file.
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            path: default_log_path(),
        }
    }
}

/// Resolves the default log file location: the user's home directory,
/// falling back to the current directory.
pub fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

/// Reads and parses a JSON config file.
pub fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(Into::into)
}
