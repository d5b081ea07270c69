//! Storage Adapters
//!
//! Implementations of the `ChainStore` trait.

mod file;
mod memory;

pub use file::FileChainStore;
pub use memory::InMemoryChainStore;

use crate::domain::Block;
use crate::error::StoreError;
use crate::GENESIS_PREVIOUS_HASH;

/// Reject a block that does not extend `tip`.
///
/// Runs under the store's write lock so the check and the write are atomic.
fn check_extends(tip: Option<&Block>, block: &Block) -> Result<(), StoreError> {
    let (expected_index, expected_previous) = match tip {
        Some(tip) => (tip.index + 1, tip.hash.as_str()),
        None => (0, GENESIS_PREVIOUS_HASH),
    };

    if block.index != expected_index || block.previous_hash != expected_previous {
        return Err(StoreError::Conflict {
            expected_index,
            actual_index: block.index,
        });
    }
    Ok(())
}
