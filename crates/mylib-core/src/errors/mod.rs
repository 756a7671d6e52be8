//! Error handling for mylib.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod conversion_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use conversion_error::ConversionError;
pub use error_code::MylibErrorCode;
