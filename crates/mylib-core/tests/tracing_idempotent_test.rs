//! `init_tracing` may be called any number of times.
//!
//! Each tracing scenario lives in its own test file: the subscriber is
//! process-global and installed once.

use mylib_core::config::LoggingConfig;
use mylib_core::tracing::{init_tracing, init_tracing_with};
use tracing::Level;

#[test]
fn repeated_init_keeps_first_subscriber() {
    std::env::remove_var("MYLIB_LOG");
    init_tracing();
    assert!(tracing::enabled!(target: "mylib_core::greeting", Level::INFO));
    assert!(!tracing::enabled!(target: "mylib_core::greeting", Level::DEBUG));

    // Later calls with a louder config do not replace the installed filter.
    init_tracing();
    init_tracing_with(&LoggingConfig {
        level: Some("trace".into()),
        with_target: None,
    });
    assert!(!tracing::enabled!(target: "mylib_core::greeting", Level::DEBUG));
}
