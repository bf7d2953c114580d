//! Diagnostic logging for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset; keeps play output clean.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a `fmt` subscriber writing to stderr, filtered by `RUST_LOG`.
/// A second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
