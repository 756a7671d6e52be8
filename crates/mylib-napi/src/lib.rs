//! # mylib-napi
//!
//! NAPI-RS v3 bindings exposing mylib to JavaScript.
//!
//! Architecture:
//! - `conversions` — Rust ↔ JS type conversions, error code mapping
//! - `bindings` — NAPI-exported functions and the `Person` class

pub mod bindings;
pub mod conversions;
