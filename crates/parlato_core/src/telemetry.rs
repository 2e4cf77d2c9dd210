//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Verbosity comes from the `LOGLEVEL` environment variable using the
/// standard `EnvFilter` directive syntax, defaulting to `debug`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_env("LOGLEVEL").unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
