//! # Node Runtime
//!
//! ## Startup Sequence
//!
//! 1. Assemble subsystems (open chain, wire cascade)
//! 2. Full chain integrity check; refuse to serve a tampered ledger
//! 3. Log chain summary and signal ready

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use sl_01_chain_ledger::{ChainSummary, IntegrityReport};

use crate::container::{NodeConfig, SubsystemContainer};

/// What the node found on startup.
#[derive(Debug, Clone)]
pub struct StartupReport {
    /// Size and tip of the chain.
    pub summary: ChainSummary,
    /// Result of the full integrity check.
    pub integrity: IntegrityReport,
}

/// The node runtime.
pub struct NodeRuntime {
    container: Arc<SubsystemContainer>,
}

impl NodeRuntime {
    /// Open the file-backed chain and wire all subsystems.
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!("Creating Seat-Ledger node runtime");
        let container =
            SubsystemContainer::open(config).context("Failed to assemble subsystems")?;
        Ok(Self::from_container(container))
    }

    /// Run over an already assembled container.
    pub fn from_container(container: SubsystemContainer) -> Self {
        Self {
            container: Arc::new(container),
        }
    }

    /// Check the chain and report readiness.
    ///
    /// ## Errors
    ///
    /// Fails when the chain cannot be read or any block violates the seal
    /// or link invariants.
    pub async fn start(&self) -> Result<StartupReport> {
        info!("===========================================");
        info!("  Seat-Ledger Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let ledger = &self.container.ledger;

        let integrity = ledger
            .integrity_report()
            .await
            .context("Failed to read chain for integrity check")?;

        if !integrity.is_valid() {
            for violation in &integrity.violations {
                error!("[sl-01] Integrity violation: {}", violation);
            }
            bail!(
                "Ledger integrity check failed: {} violation(s) in {}",
                integrity.violations.len(),
                self.container.config.data_dir.display()
            );
        }

        let summary = ledger
            .chain_summary()
            .await
            .context("Failed to read chain summary")?;

        match &summary.tip_hash {
            Some(tip) => info!(
                "[sl-01] Chain verified: {} blocks, tip #{} {}",
                summary.block_count,
                summary.tip_index.unwrap_or_default(),
                tip
            ),
            None => info!("[sl-01] Chain empty, genesis will be mined on first append"),
        }
        info!("Difficulty: {}", self.container.config.ledger.difficulty);
        info!("Data Dir: {}", self.container.config.data_dir.display());

        Ok(StartupReport { summary, integrity })
    }

    /// Shutdown the node.
    ///
    /// Every append is fsynced before it returns, so there is nothing to flush.
    pub async fn shutdown(&self) {
        info!("Shutdown complete");
    }

    /// Get a reference to the subsystem container.
    pub fn container(&self) -> Arc<SubsystemContainer> {
        Arc::clone(&self.container)
    }
}
