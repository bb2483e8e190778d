//! Logging setup for hosts that want to see the library's tracing events.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`
/// (default `gold_bridge=info`).
///
/// # Returns
/// 0 if installed, 1 if a global subscriber was already set.
#[no_mangle]
pub extern "C" fn gb_init_logging() -> i32 {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gold_bridge=info"));

    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
