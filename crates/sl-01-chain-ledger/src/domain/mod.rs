//! Domain layer - Pure ledger logic
//!
//! Everything here is synchronous and free of I/O. Hashing and mining are
//! free functions over a `Block` value so the persistence layer never owns
//! them.
//!
//! ## Entities
//!
//! - [`Block`]: one sealed ledger unit
//! - [`TransactionMatch`]: result of a (film, user, seat) lookup
//! - [`ChainSummary`]: block count and tip of the chain
//!
//! ## Services
//!
//! - [`fingerprint`]: SHA-256 over the canonical block fields
//! - [`mine`]: nonce search for a leading-zero hash prefix
//! - [`build_candidate`]: next unsealed block on top of the tip
//! - [`check_chain`]: seal and link verification

mod entities;
pub mod fingerprint;
pub mod invariants;
pub mod miner;
mod services;

pub use entities::*;
pub use fingerprint::fingerprint;
pub use invariants::{check_chain, IntegrityReport, IntegrityViolation};
pub use miner::{meets_difficulty, mine};
pub use services::{build_candidate, find_in_blocks};
