//! # Ledger Service
//!
//! The main service implementing the Ledger API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `LedgerApi` for appends and chain reads
//! 2. Mines on the blocking pool, outside any lock
//! 3. Serializes persistence through a single-writer mutex
//! 4. Uses dependency injection for the store and the clock

mod ledger;

use crate::config::LedgerConfig;
use crate::error::Result;
use crate::ports::outbound::{ChainStore, SystemTimeSource, TimeSource};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The Ledger Service.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct LedgerService<S: ChainStore> {
    /// Chain persistence.
    pub(crate) store: Arc<S>,
    /// Difficulty, scan window and retry bound.
    pub(crate) config: LedgerConfig,
    /// Clock for candidate timestamps.
    pub(crate) clock: Arc<dyn TimeSource>,
    /// Single writer for the persist step (INVARIANT-4).
    pub(crate) writer: Mutex<()>,
}

impl<S: ChainStore + 'static> LedgerService<S> {
    /// Create a service over `store`.
    ///
    /// ## Errors
    ///
    /// - `InvalidConfig`: configuration failed validation
    pub fn new(store: Arc<S>, config: LedgerConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            difficulty = config.difficulty,
            scan_window = config.scan_window,
            "[sl-01] Ledger service configured"
        );

        Ok(Self {
            store,
            config,
            clock: Arc::new(SystemTimeSource),
            writer: Mutex::new(()),
        })
    }

    /// Replace the clock.
    pub fn with_time_source(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}
