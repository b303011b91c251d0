//! Tracing setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so they never mix with output on stdout. `RUST_LOG`
/// wins over the default level, which is `warn` or `debug` when verbose.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    // a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();
}
