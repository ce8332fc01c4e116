//! Process-wide tracing setup shared by binaries and integration tests.

pub mod subscriber;

pub use subscriber::{LogFormat, TracingConfig};

/// Initialize process-wide tracing with the default configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(&TracingConfig::default());
}

/// Initialize process-wide tracing with `config`. Same idempotence as [`init`].
pub fn init_with(config: &TracingConfig) {
    subscriber::init(config);
}
