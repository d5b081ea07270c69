//! Pure ledger logic shared by the service and its tests

use super::entities::{Block, TransactionMatch};
use crate::GENESIS_PREVIOUS_HASH;
use shared_types::{EpochMillis, ReservationKey, Transaction};

/// Build the unsealed successor of `latest`.
///
/// Genesis (index 0, previousHash `"0"`) when the chain is empty. The
/// candidate carries an empty hash and nonce 0 until it is mined.
pub fn build_candidate(
    latest: Option<&Block>,
    transaction: Transaction,
    timestamp: EpochMillis,
) -> Block {
    let (index, previous_hash) = match latest {
        Some(tip) => (tip.index + 1, tip.hash.clone()),
        None => (0, GENESIS_PREVIOUS_HASH.to_string()),
    };

    Block {
        index,
        timestamp,
        transactions: vec![transaction],
        previous_hash,
        hash: String::new(),
        nonce: 0,
    }
}

/// First matching transaction in `blocks`, in iteration order.
///
/// Callers pass blocks newest-first so the most recent record wins.
pub fn find_in_blocks<'a, I>(blocks: I, key: &ReservationKey) -> Option<TransactionMatch>
where
    I: IntoIterator<Item = &'a Block>,
{
    blocks.into_iter().find_map(|block| {
        block.find(key).map(|tx| TransactionMatch {
            block_index: block.index,
            transaction: tx.clone(),
        })
    })
}
