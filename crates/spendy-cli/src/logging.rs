//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. The filter is
//! read from `SPENDY_LOG` (same syntax as `RUST_LOG`) and defaults to `error`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SPENDY_LOG";
const DEFAULT_DIRECTIVE: &str = "error";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
