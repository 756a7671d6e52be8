//! Observability for mylib.
//! `tracing` crate with `EnvFilter`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
