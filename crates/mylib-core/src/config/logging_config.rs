//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::LOG_LEVELS;

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for all `mylib` targets. Default: "info".
    pub level: Option<String>,
    /// Include the event target in log lines. Default: true.
    pub with_target: Option<bool>,
}

impl LoggingConfig {
    /// Returns the effective level, lowercased, defaulting to "info".
    pub fn effective_level(&self) -> String {
        self.level
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "info".to_string())
    }

    /// Returns whether targets are printed, defaulting to true.
    pub fn effective_with_target(&self) -> bool {
        self.with_target.unwrap_or(true)
    }

    /// `EnvFilter` directive derived from the effective level.
    pub fn filter_directive(&self) -> String {
        format!("mylib={}", self.effective_level())
    }

    /// Whether `level` names one of the accepted log levels.
    pub fn is_valid_level(level: &str) -> bool {
        let level = level.to_ascii_lowercase();
        LOG_LEVELS.contains(&level.as_str())
    }
}
