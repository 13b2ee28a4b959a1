//! `thinlace_log` v1:
//! Logging bootstrap shared by thinlace binaries.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const C_LOG_FILTER_DEFAULT: &str = "info";

/// Build the env filter from `RUST_LOG`, falling back to `default_directive`.
pub fn derive_env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global `fmt` subscriber writing to stderr.
///
/// Fails when a global subscriber is already installed.
pub fn init_logging() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(derive_env_filter(C_LOG_FILTER_DEFAULT))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("Failed to initialize logging: {err}"))
}
