//! Diagnostics on stderr via `tracing`.
//!
//! Stdout carries only the prompt result, so every log line goes to stderr.
//! `RUST_LOG` selects the filter; it defaults to `warn`, or `debug` with
//! `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(verbose: bool) {
    let fallback = if verbose { "termprompt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
