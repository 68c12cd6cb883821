//! Tracing subscriber setup for hosts embedding the route core.

use tracing_subscriber::EnvFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` overrides `default_directive` (e.g. `"sail_route=debug"`).
/// Fails rather than panicking if a subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
}
