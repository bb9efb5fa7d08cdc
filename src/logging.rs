//! Tracing subscriber setup

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level; `verbose` forces debug output
/// for this crate.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let directive = if verbose {
        "tunicamp=debug,info".to_string()
    } else {
        format!("tunicamp={},warn", config.level)
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
