//! # Seat-Ledger Node Runtime
//!
//! Loads configuration from the environment, installs logging, opens the
//! chain under `SL_DATA_DIR`, refuses to start on a tampered ledger, then
//! idles until Ctrl+C.

use anyhow::{Context, Result};
use tracing::info;

use node_runtime::logging::init_logging;
use node_runtime::{NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env();
    init_logging(&config)?;

    config.validate().context("Invalid configuration")?;

    let runtime = NodeRuntime::new(config)?;
    runtime.start().await?;

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    runtime.shutdown().await;
    Ok(())
}
