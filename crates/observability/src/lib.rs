//! Tracing/logging setup shared by catalog hosts and tests.

/// Environment-driven configuration.
pub mod config;

/// Subscriber construction and installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> anyhow::Result<()> {
    let config = ObservabilityConfig::from_env()?;
    tracing::init(&config);
    Ok(())
}
