//! Tracing subscriber bootstrap for hosts that embed the library.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "amharic_tts=info";

/// Install a fmt subscriber filtered by `RUST_LOG` (default [`DEFAULT_FILTER`]).
///
/// Fails if a global subscriber is already set.
pub fn try_init() -> crate::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| {
            crate::Error::configuration(format!("Failed to install tracing subscriber: {}", e))
        })
}

/// Like [`try_init`], but a subscriber that is already installed is left in place.
pub fn init() {
    if try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
