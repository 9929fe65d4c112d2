//! Diagnostic tracing setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global subscriber.
///
/// Events go to stderr so they never mix with the status lines on stdout.
/// The filter comes from `RUST_LOG` and falls back to `warn`, which keeps a
/// normal run silent.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
