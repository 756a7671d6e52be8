//! mylib error → napi::Error conversion with structured `[ERROR_CODE] message` strings.
//!
//! The JS side parses the code from the message format:
//! `[ERROR_CODE] Human-readable message`.

use mylib_core::errors::error_code::MylibErrorCode;
use napi::Status;

pub use mylib_core::errors::error_code::{CONFIG_ERROR, CONVERSION_ERROR};

/// Convert any mylib error implementing `MylibErrorCode + Display` to a structured NAPI error.
pub fn to_napi_error(err: impl std::fmt::Display + MylibErrorCode) -> napi::Error {
    napi::Error::new(Status::GenericFailure, err.host_string())
}

/// Convert a `ConfigError` to a NAPI error.
pub fn config_error(err: mylib_core::ConfigError) -> napi::Error {
    to_napi_error(err)
}

/// Convert a `ConversionError` to a NAPI error; JS passed a value of the wrong shape.
pub fn conversion_error(err: mylib_core::ConversionError) -> napi::Error {
    napi::Error::new(Status::InvalidArg, err.host_string())
}
