//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the chain ledger subsystem.

use crate::domain::{Block, ChainSummary, IntegrityReport, TransactionMatch};
use crate::error::Result;
use async_trait::async_trait;
use shared_types::{ReservationKey, Transaction};

/// Primary API for the chain ledger.
///
/// Implementations must enforce the seal, link and single-writer
/// invariants on every append.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Seal `transaction` in a new block and persist it as the tip.
    ///
    /// The returned block is exactly what was persisted.
    ///
    /// ## Errors
    ///
    /// - `InvalidTransaction`: rejected before mining
    /// - `PersistenceConflict`: the tip kept moving for every attempt
    /// - `Storage`: the store failed
    async fn append_transaction(&self, transaction: Transaction) -> Result<Block>;

    /// True iff every block is sealed and linked.
    ///
    /// A store read failure reports `false`; the chain cannot be vouched for.
    async fn verify_chain_integrity(&self) -> bool;

    /// Every violation found in the chain.
    async fn integrity_report(&self) -> Result<IntegrityReport>;

    /// Most recent transaction matching `key`, with its block index.
    ///
    /// Searches the recent window first, then the rest of the chain.
    async fn find_transaction(&self, key: &ReservationKey) -> Result<Option<TransactionMatch>>;

    /// Current tip.
    async fn latest_block(&self) -> Result<Option<Block>>;

    /// Block at `index`.
    async fn block_at(&self, index: u64) -> Result<Option<Block>>;

    /// Whole chain, ascending.
    async fn all_blocks(&self) -> Result<Vec<Block>>;

    /// Size and tip of the chain.
    async fn chain_summary(&self) -> Result<ChainSummary>;
}
