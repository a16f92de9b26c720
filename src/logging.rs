//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the document or progress
//! output. `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "cmdlog2tex=warn",
        1 => "cmdlog2tex=info",
        2 => "cmdlog2tex=debug",
        _ => "cmdlog2tex=trace",
    }
}

/// Installs the global subscriber. Does nothing if one is already set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
