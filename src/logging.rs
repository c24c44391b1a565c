//! Diagnostic logging setup
//!
//! Library code emits `tracing` events; the binary routes them to stderr,
//! filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use crate::constants::logging::DEFAULT_FILTER;

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
