//! `tracing` subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `atelier=debug`).
pub(crate) const LOG_ENV: &str = "ATELIER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber. Safe to call more than once.
pub(crate) fn init_logging() {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Parse a filter directive, falling back to `warn` when unset or invalid.
fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
