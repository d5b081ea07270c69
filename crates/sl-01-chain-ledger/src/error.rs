//! Error types for the chain ledger subsystem

use shared_types::ValidationError;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors raised by a `ChainStore` implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The block does not extend the current tip
    #[error("Append conflict: expected index {expected_index}, got {actual_index}")]
    Conflict {
        /// Index the store would accept next
        expected_index: u64,
        /// Index of the rejected block
        actual_index: u64,
    },

    /// Underlying file I/O failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Block could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur while appending to or reading the ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Concurrent appends kept moving the tip
    #[error("Persistence conflict: tip changed during {attempts} append attempts")]
    PersistenceConflict {
        /// Attempts made before giving up
        attempts: u32,
    },

    /// Chain store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Transaction rejected before mining
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] ValidationError),

    /// The blocking mining task panicked or was cancelled
    #[error("Mining task failed: {0}")]
    MiningTaskFailed(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LedgerError {
    /// Check if the caller may retry the whole append
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PersistenceConflict { .. } | Self::Storage(StoreError::Conflict { .. })
        )
    }

    /// Check if the error points at a misconfigured or broken process
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::MiningTaskFailed(_))
    }
}
