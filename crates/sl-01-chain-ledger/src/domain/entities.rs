//! Domain entities for the chain ledger

use serde::{Deserialize, Serialize};
use shared_types::{EpochMillis, ReservationKey, Transaction};

/// One sealed unit of the ledger.
///
/// Field names are the persisted wire names; `FileChainStore` writes this
/// struct as-is and reloads it for re-derivation of `hash`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain, starting at 0
    pub index: u64,

    /// Creation time of the candidate block
    pub timestamp: EpochMillis,

    /// Recorded transactions (exactly one per block in this system)
    pub transactions: Vec<Transaction>,

    /// Hash of the preceding block, `"0"` for genesis
    pub previous_hash: String,

    /// Hex SHA-256 fingerprint of the fields above plus `nonce`
    pub hash: String,

    /// Proof-of-work counter
    pub nonce: u64,
}

impl Block {
    /// Whether this block starts the chain
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// First transaction matching the (film, user, seat) triple
    pub fn find(&self, key: &ReservationKey) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| key.matches(tx))
    }
}

/// A transaction located in the chain
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionMatch {
    /// Index of the block holding the transaction
    pub block_index: u64,

    /// The matching transaction
    pub transaction: Transaction,
}

/// Size and tip of the chain
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainSummary {
    /// Number of persisted blocks
    pub block_count: u64,

    /// Index of the latest block (None if the chain is empty)
    pub tip_index: Option<u64>,

    /// Hash of the latest block (None if the chain is empty)
    pub tip_hash: Option<String>,
}

impl ChainSummary {
    /// Summarize a chain from its latest block
    pub fn from_tip(tip: Option<&Block>) -> Self {
        match tip {
            Some(block) => Self {
                block_count: block.index + 1,
                tip_index: Some(block.index),
                tip_hash: Some(block.hash.clone()),
            },
            None => Self::default(),
        }
    }
}
