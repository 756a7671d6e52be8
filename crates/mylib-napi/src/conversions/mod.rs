//! Rust ↔ JS conversions.

pub mod error_codes;
pub mod person_types;
