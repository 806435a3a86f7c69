//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the run summary. The filter is
//! taken from `NEXT_SALVAGE_LOG` when set, otherwise from `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "NEXT_SALVAGE_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "next_salvage=debug" } else { "warn" }
}

/// Install the global subscriber; repeated calls are ignored
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
