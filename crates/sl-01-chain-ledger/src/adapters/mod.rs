//! # Adapters Module
//!
//! - `storage`: `ChainStore` implementations (memory, JSON-lines file)

pub mod storage;

pub use storage::{FileChainStore, InMemoryChainStore};
