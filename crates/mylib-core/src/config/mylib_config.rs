//! Top-level mylib configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::LoggingConfig;
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit TOML string (via `from_toml`, replaces the file layers)
/// 2. Environment variables (`MYLIB_*`)
/// 3. Project config (`mylib.toml` in the project root)
/// 4. User config (`~/.mylib/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MylibConfig {
    pub logging: LoggingConfig,
}

impl MylibConfig {
    /// Load configuration from the user config and the project at `root`.
    pub fn load(root: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layers(Self::user_config_path().as_deref(), root)
    }

    /// Like `load`, but hands back skipped-layer warnings instead of logging
    /// them, for callers that install the subscriber afterwards.
    pub fn load_reporting(root: Option<&Path>) -> Result<(Self, Vec<ConfigError>), ConfigError> {
        Self::load_layers_reporting(Self::user_config_path().as_deref(), root)
    }

    /// Load configuration from explicit layer locations.
    ///
    /// `user_config` is a file path; `root` is a project directory that may
    /// contain `mylib.toml`. Missing files are skipped.
    pub fn load_layers(
        user_config: Option<&Path>,
        root: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let (config, warnings) = Self::load_layers_reporting(user_config, root)?;
        for warning in &warnings {
            tracing::warn!(error = %warning, "ignoring unreadable user config");
        }
        Ok(config)
    }

    /// Load configuration from explicit layer locations, returning the
    /// non-fatal errors hit along the way.
    ///
    /// An unreadable user config is skipped and reported; invalid TOML in
    /// any layer is fatal.
    pub fn load_layers_reporting(
        user_config: Option<&Path>,
        root: Option<&Path>,
    ) -> Result<(Self, Vec<ConfigError>), ConfigError> {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        // Layer 4 (lowest priority): user config
        if let Some(path) = user_config {
            if path.exists() {
                match Self::merge_toml_file(&mut config, path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => warnings.push(e),
                }
            }
        }

        // Layer 3: project config
        if let Some(root) = root {
            let project_path = root.join(PROJECT_CONFIG_FILE);
            if project_path.exists() {
                Self::merge_toml_file(&mut config, &project_path)?;
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok((config, warnings))
    }

    /// Load configuration from a TOML string. Environment overrides still apply.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MylibConfig) -> Result<(), ConfigError> {
        if let Some(ref level) = config.logging.level {
            if !LoggingConfig::is_valid_level(level) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!(
                        "'{level}' is not one of trace, debug, info, warn, error"
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.mylib/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".mylib").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MylibConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MylibConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut MylibConfig, other: &MylibConfig) {
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.with_target.is_some() {
            base.logging.with_target = other.logging.with_target;
        }
    }

    fn apply_env_overrides(config: &mut MylibConfig) {
        if let Ok(val) = std::env::var("MYLIB_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
        if let Ok(val) = std::env::var("MYLIB_LOG_TARGET") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.with_target = Some(v);
            }
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
