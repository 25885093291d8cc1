//! Tracing subscriber setup

use crate::config::LoggingSettings;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a formatted subscriber filtered by `settings.level`.
///
/// Returns `false` when a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init(settings: &LoggingSettings) -> bool {
    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(settings.with_target)
        .try_init()
        .is_ok()
}
