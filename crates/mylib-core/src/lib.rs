//! # mylib-core
//!
//! Host-agnostic payload of the mylib native module.
//! Defines `Person`, `hello`, errors, config, and tracing setup.
//! The NAPI crate is a thin shim over this one.

pub mod config;
pub mod constants;
pub mod errors;
pub mod greeting;
pub mod person;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::MylibConfig;
pub use errors::{ConfigError, ConversionError, MylibErrorCode};
pub use greeting::hello;
pub use person::Person;
