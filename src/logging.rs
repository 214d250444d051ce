//! Tracing configuration.
//!
//! Logs go to stderr through a compact formatter so stdout stays free for the
//! run summary. Filtering follows `RUST_LOG` and defaults to `info`.
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
