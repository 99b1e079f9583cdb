//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging with the default settings.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(&tracing::LogConfig::default());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
