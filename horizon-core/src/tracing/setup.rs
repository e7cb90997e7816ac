//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Horizon tracing/logging system.
///
/// Reads the `HORIZON_LOG` environment variable for per-module log levels.
/// Format: `HORIZON_LOG=horizon_index=debug,horizon_sources=info`
///
/// Falls back to `horizon=<default_level>` if `HORIZON_LOG` is not set or is invalid.
///
/// Events go to stderr. Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HORIZON_LOG")
            .unwrap_or_else(|_| EnvFilter::new(format!("horizon={default_level}")));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
