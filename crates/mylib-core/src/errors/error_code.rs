//! MylibErrorCode trait for host error conversion.

/// Every error enum implements this to provide a stable error code
/// string the host side can match on.
pub trait MylibErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONVERSION_ERROR: &str = "CONVERSION_ERROR";
