//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the ledger service.

use crate::domain::Block;
use crate::error::StoreError;

/// Append-only persistence for sealed blocks.
///
/// Production: `FileChainStore`
/// Testing: `InMemoryChainStore`
///
/// Implementations use interior locking so one store can be shared behind
/// an `Arc` by the service and by read-only callers.
pub trait ChainStore: Send + Sync {
    /// Number of persisted blocks.
    fn len(&self) -> Result<u64, StoreError>;

    /// Whether no block has been persisted yet.
    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Block with the highest index, if any.
    fn latest(&self) -> Result<Option<Block>, StoreError>;

    /// Block at `index`, if persisted.
    fn get(&self, index: u64) -> Result<Option<Block>, StoreError>;

    /// Up to `limit` most recent blocks, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<Block>, StoreError>;

    /// The whole chain in ascending index order.
    fn all_ascending(&self) -> Result<Vec<Block>, StoreError>;

    /// Persist `block` as the new tip.
    ///
    /// ## Append-Only (INVARIANT-4 / INVARIANT-5)
    ///
    /// Rejects with `StoreError::Conflict` unless `block.index` equals the
    /// current length. The check and the write happen under one lock.
    fn append(&self, block: &Block) -> Result<(), StoreError>;
}

/// Clock used to timestamp candidate blocks (for testability).
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Default time source using system time.
#[derive(Default, Debug, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
