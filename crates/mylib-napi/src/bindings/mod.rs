//! All NAPI-exported items, grouped by domain.

pub mod greeting;
pub mod lifecycle;
pub mod person;
