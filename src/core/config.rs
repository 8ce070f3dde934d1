//! Logger configuration
//!
//! A plain serde-friendly value that can be embedded in a host
//! application's own settings file, or read from the environment.

use super::error::{LoggerError, Result};
use super::timestamp::TimestampFormat;
use crate::appenders::file::DEFAULT_LOG_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the initial enabled flag
pub const ENV_ENABLED: &str = "TWINLOG_ENABLED";

/// Environment variable holding the log file path; empty or `none` disables the file
pub const ENV_FILE: &str = "TWINLOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub enabled: bool,
    pub file_path: Option<PathBuf>,
    pub timestamp_format: TimestampFormat,
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file_path: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            timestamp_format: TimestampFormat::default(),
            colors: false,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `TWINLOG_ENABLED` and `TWINLOG_FILE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `TWINLOG_*` keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ENABLED) {
            config.enabled = parse_bool(&raw).ok_or_else(|| {
                LoggerError::config(ENV_ENABLED, format!("expected a boolean, got '{}'", raw))
            })?;
        }

        if let Some(raw) = lookup(ENV_FILE) {
            let raw = raw.trim();
            config.file_path = if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(PathBuf::from(raw))
            };
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
