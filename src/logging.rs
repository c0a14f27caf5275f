use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,http_failure=debug";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, or by
/// `default_filter` when that is unset.
///
/// Fails if a global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
