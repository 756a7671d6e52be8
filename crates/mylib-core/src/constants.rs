//! Crate-wide constants.

/// The fixed text returned by `hello()`.
pub const GREETING: &str = "Hi, Leo Proko!";

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "MYLIB_LOG";

/// Fallback filter when `MYLIB_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "mylib=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "mylib.toml";

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
