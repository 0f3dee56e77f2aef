//! Diagnostic logging for the CLI itself.
//!
//! Diagnostics go to stderr through `tracing` so they never interleave with
//! rendered output on stdout. `RUST_LOG` takes precedence over `--log-level`.

use crate::args::LogLevel;
use tracing_subscriber::EnvFilter;

pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // An embedding test harness may already own the global subscriber
    if let Err(err) = installed {
        tracing::debug!(error = %err, "diagnostics subscriber already installed");
    }
}
