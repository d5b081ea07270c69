//! # Seat-Ledger - Chain Ledger (Subsystem 01)
//!
//! **Bounded Context:** Ledger persistence & proof-of-work sealing
//!
//! ## Purpose
//!
//! An append-only, hash-linked chain of blocks recording seat transactions.
//! Every block carries exactly one transaction and is sealed by a
//! proof-of-work search before it is persisted. The chain is the local
//! authority the verification cascade (subsystem 02) consults.
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Adapters (Outer)                                   │
//! │  - InMemoryChainStore                               │
//! │  - FileChainStore (JSON lines, fsync per block)     │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports (Middle)                                     │
//! │  - Inbound: LedgerApi                               │
//! │  - Outbound: ChainStore, TimeSource                 │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (Inner - Pure Logic)                        │
//! │  - Block, fingerprint                               │
//! │  - mine, meets_difficulty                           │
//! │  - Invariants: seal, genesis link, back-link        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Seal**: `hash == fingerprint(index, timestamp, transactions, previousHash, nonce)`
//! 2. **Genesis Link**: `index == 0 ⇒ previousHash == "0"`
//! 3. **Back-Link**: `index > 0 ⇒ previousHash == chain[index - 1].hash`
//! 4. **Single Writer**: no two persisted blocks share an index or a previousHash
//! 5. **Append-Only**: persisted blocks are never mutated or deleted
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let store = Arc::new(InMemoryChainStore::new());
//! let ledger = LedgerService::new(store, LedgerConfig::default())?;
//!
//! let block = ledger
//!     .append_transaction(Transaction::purchase("U1", "F1", 5, 10.0, now))
//!     .await?;
//! assert!(block.hash.starts_with("00"));
//! assert!(ledger.verify_chain_integrity().await);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Chain store adapters
pub mod adapters;
/// Domain models and pure ledger logic
pub mod domain;
pub mod ports;
pub mod service;

mod config;
mod error;

#[cfg(test)]
mod test_utils;

pub use config::LedgerConfig;
pub use error::{LedgerError, Result, StoreError};

pub use domain::{
    build_candidate, fingerprint, meets_difficulty, mine, Block, ChainSummary,
    IntegrityReport, IntegrityViolation, TransactionMatch,
};

pub use ports::{ChainStore, LedgerApi, SystemTimeSource, TimeSource};

pub use adapters::{FileChainStore, InMemoryChainStore};

pub use service::LedgerService;

/// Subsystem identifier used in log prefixes
pub const SUBSYSTEM_ID: u8 = 1;

/// Leading zero hex characters required of every sealed block hash
pub const DEFAULT_DIFFICULTY: usize = 2;

/// `previousHash` value carried by the genesis block
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Most recent blocks searched before a lookup falls through to the full chain
pub const DEFAULT_SCAN_WINDOW: usize = 10;

/// Build-mine-persist attempts before a contended append gives up
pub const DEFAULT_MAX_APPEND_RETRIES: u32 = 3;

/// Upper bound on difficulty (a SHA-256 hex digest has 64 characters)
pub const MAX_DIFFICULTY: usize = 64;
