//! Tracing subscriber setup
//!
//! Logs go to stderr: stdout carries the MCP protocol in stdio mode.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

pub const LOG_VAR: &str = "LEXICON_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter directives: `LEXICON_LOG`, then `RUST_LOG`, then `info`
pub fn filter_directives() -> String {
    [LOG_VAR, "RUST_LOG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_new(filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
