//! Logging initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for an embedding application.
///
/// Honors `RUST_LOG` when set; defaults to debug output for this crate.
/// Call once at startup.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callbridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
