//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Filter from `RUST_LOG`, falling back to the configured level for this crate and `warn` elsewhere
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,weathertop={level},tower_http={level}",
            level = config.level
        ))
    })
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.format == "json" {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer().pretty()).try_init()?;
    }

    Ok(())
}
