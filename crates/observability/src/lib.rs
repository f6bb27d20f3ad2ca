//! Tracing and logging setup shared by PrintERP binaries.

/// Initialize process-wide tracing with settings taken from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::LogSettings::from_env());
}

/// Subscriber configuration (filters, output format).
pub mod tracing;
