//! Tracing and logging setup shared by the workspace binaries.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(DEFAULT_FILTER);
}

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Tracing configuration (filters, layers).
pub mod tracing;
