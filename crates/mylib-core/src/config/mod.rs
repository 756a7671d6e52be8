//! Configuration system for mylib.
//! TOML-based, layered resolution: explicit > env > project > user > defaults.

pub mod logging_config;
pub mod mylib_config;

pub use logging_config::LoggingConfig;
pub use mylib_config::MylibConfig;
