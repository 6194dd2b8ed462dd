//! Logging setup
//!
//! Diagnostics go to stderr so stdout stays clean for the formatted
//! timestamp and `--json` output. `RUST_LOG` overrides the level.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Warnings only unless `debug` is set.
pub(crate) fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}
