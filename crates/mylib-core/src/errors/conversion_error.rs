//! Errors converting payload types to and from host JSON values.

use super::error_code::{self, MylibErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Failed to serialize {type_name}: {message}")]
    Serialize {
        type_name: &'static str,
        message: String,
    },

    #[error("Failed to deserialize {type_name}: {message}")]
    Deserialize {
        type_name: &'static str,
        message: String,
    },
}

impl MylibErrorCode for ConversionError {
    fn error_code(&self) -> &'static str {
        error_code::CONVERSION_ERROR
    }
}
