//! Structured logging.
//!
//! # Responsibilities
//! - Install the default stdout subscriber when the host has none
//! - Honour `RUST_LOG`, falling back to the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stdout subscriber filtered at `level`.
///
/// The library never installs a subscriber on its own. Without this call
/// (or a host subscriber), establishment records are dropped.
///
/// Returns false when a global subscriber was already set, in which case the
/// existing one keeps receiving every record.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .try_init()
        .is_ok()
}
