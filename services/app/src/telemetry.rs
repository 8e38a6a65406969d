//! services/app/src/telemetry.rs
//!
//! Tracing subscriber setup, called once by the presentation shell at startup.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber at the given level.
///
/// `RUST_LOG`-style directives still apply through the `EnvFilter`, so a shell
/// can raise verbosity for a single module without code changes.
pub fn init_tracing(level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
