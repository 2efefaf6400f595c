//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Build the env filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so they never interleave with fixture output on stdout.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default: &str) {
    // JSON logs + timestamps, configurable via RUST_LOG.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        ::tracing::debug!(default_filter = default, "logging initialized");
    }
}
