//! `init_tracing_with` takes its level from `LoggingConfig`.

use mylib_core::config::LoggingConfig;
use mylib_core::tracing::init_tracing_with;
use tracing::Level;

#[test]
fn configured_level_applies_to_mylib_targets() {
    std::env::remove_var("MYLIB_LOG");
    let config = LoggingConfig {
        level: Some("DEBUG".into()),
        with_target: Some(false),
    };
    init_tracing_with(&config);

    assert!(tracing::enabled!(target: "mylib_core::person", Level::DEBUG));
    assert!(tracing::enabled!(target: "mylib_napi", Level::DEBUG));
    assert!(!tracing::enabled!(target: "mylib_core::person", Level::TRACE));
    assert!(!tracing::enabled!(target: "other", Level::INFO));
}

#[test]
fn filter_directive_lowercases_level() {
    let config = LoggingConfig {
        level: Some("WARN".into()),
        with_target: None,
    };
    assert_eq!(config.filter_directive(), "mylib=warn");
}
