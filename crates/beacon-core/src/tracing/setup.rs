use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize Beacon logging.
///
/// Reads the `BEACON_LOG` environment variable, e.g.
/// `BEACON_LOG=beacon_client=debug`. Falls back to `info` when unset or
/// invalid. Idempotent, and leaves an already-installed global subscriber
/// in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Initialize logging with an explicit filter, such as `LoggingConfig::filter`.
pub fn init_tracing_with_filter(filter: &str) {
    let filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
