//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize tracing with default settings.
///
/// Reads the `MYLIB_LOG` environment variable as an `EnvFilter` directive,
/// e.g. `MYLIB_LOG=mylib_core=trace,mylib_napi=debug`.
/// Falls back to `mylib=info` if unset, empty, or invalid.
///
/// Idempotent.
pub fn init_tracing() {
    install(DEFAULT_LOG_FILTER, true);
}

/// Initialize tracing, taking the fallback filter and format from `config`.
/// `MYLIB_LOG` still wins when it holds a valid directive.
pub fn init_tracing_with(config: &LoggingConfig) {
    install(&config.filter_directive(), config.effective_with_target());
}

fn install(fallback: &str, with_target: bool) {
    INIT.call_once(|| {
        // An empty directive would silence everything, so it counts as unset.
        let filter = std::env::var(LOG_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| EnvFilter::try_new(s).ok())
            .unwrap_or_else(|| EnvFilter::new(fallback));

        // A host process may already own the global subscriber.
        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(with_target).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
        if result.is_ok() {
            tracing::debug!("tracing initialized");
        }
    });
}
