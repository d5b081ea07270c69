use super::check_extends;
use crate::domain::Block;
use crate::error::StoreError;
use crate::ports::outbound::ChainStore;
use parking_lot::RwLock;

/// In-memory chain store for unit tests and ephemeral nodes.
#[derive(Default)]
pub struct InMemoryChainStore {
    blocks: RwLock<Vec<Block>>,
}

impl InMemoryChainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing chain, unchecked.
    ///
    /// Lets tests stage tampered or malformed chains.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks: RwLock::new(blocks),
        }
    }
}

impl ChainStore for InMemoryChainStore {
    fn len(&self) -> Result<u64, StoreError> {
        Ok(self.blocks.read().len() as u64)
    }

    fn latest(&self) -> Result<Option<Block>, StoreError> {
        Ok(self.blocks.read().last().cloned())
    }

    fn get(&self, index: u64) -> Result<Option<Block>, StoreError> {
        Ok(self.blocks.read().get(index as usize).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<Block>, StoreError> {
        Ok(self.blocks.read().iter().rev().take(limit).cloned().collect())
    }

    fn all_ascending(&self) -> Result<Vec<Block>, StoreError> {
        Ok(self.blocks.read().clone())
    }

    fn append(&self, block: &Block) -> Result<(), StoreError> {
        let mut blocks = self.blocks.write();
        check_extends(blocks.last(), block)?;
        blocks.push(block.clone());
        Ok(())
    }
}
