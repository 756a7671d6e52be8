//! Lifecycle bindings: initialize(), version().

use std::path::PathBuf;

use mylib_core::config::MylibConfig;
use mylib_core::errors::ConfigError;
use napi_derive::napi;

use crate::conversions::error_codes;

/// Options accepted by `initialize()`.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct JsInitOptions {
    /// TOML configuration string. Replaces the file layers when set.
    pub config_toml: Option<String>,
    /// Directory searched for `mylib.toml`.
    pub project_root: Option<String>,
}

/// Resolve configuration from the init options.
///
/// Also returns non-fatal layer errors, to be logged once tracing is up.
pub fn resolve_config(
    opts: &JsInitOptions,
) -> Result<(MylibConfig, Vec<ConfigError>), ConfigError> {
    match &opts.config_toml {
        Some(toml_str) => Ok((MylibConfig::from_toml(toml_str)?, Vec::new())),
        None => {
            let root = opts.project_root.as_ref().map(PathBuf::from);
            MylibConfig::load_reporting(root.as_deref())
        }
    }
}

/// Resolve configuration and install the tracing subscriber.
///
/// Idempotent: later calls re-validate config but keep the first subscriber.
#[napi]
pub fn initialize(options: Option<JsInitOptions>) -> napi::Result<()> {
    let opts = options.unwrap_or_default();
    let (config, warnings) = resolve_config(&opts).map_err(error_codes::config_error)?;
    mylib_core::tracing::init_tracing_with(&config.logging);
    for warning in &warnings {
        tracing::warn!(error = %warning, "ignoring unreadable user config");
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.logging.effective_level(),
        "mylib initialized"
    );
    Ok(())
}

/// Version of the native module.
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
