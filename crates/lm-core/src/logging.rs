//! Logging setup

use crate::config::LogLevel;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `level` when it is set. Calling this twice is
/// harmless; the second call keeps the first subscriber.
pub fn init(level: LogLevel) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter()));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
