//! Internal tracing for debugging the filter itself.
//!
//! Off unless `CCFILTER_LOG` is set (e.g. `CCFILTER_LOG=debug`). Events go to
//! stderr without ANSI codes so they never mix with the transcript on stdout.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CCFILTER_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
