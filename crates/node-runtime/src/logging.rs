//! Logging setup: `tracing_subscriber` fmt layer behind an `EnvFilter`.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::container::NodeConfig;

/// Install the global subscriber.
///
/// The filter comes from `config.log_level` (already resolved from
/// `SL_LOG_LEVEL` / `RUST_LOG`).
pub fn init_logging(config: &NodeConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
