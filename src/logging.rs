//! Diagnostic logging setup

use crate::constants::env::LOG;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber
///
/// `GITHUB_CLI_LOG` takes standard filter directives; without it only
/// warnings are shown, or this crate's debug events with `--verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "github_cli=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG).unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
