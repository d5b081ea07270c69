//! Block fingerprinting
//!
//! The fingerprint is SHA-256 over the UTF-8 concatenation of
//!
//! ```text
//! index ‖ timestamp ‖ canonical_json(transactions) ‖ previousHash ‖ nonce
//! ```
//!
//! with integers in decimal. The input order is a fixed contract: every
//! stored hash is re-derived from it during integrity checks.

use super::entities::Block;
use sha2::{Digest, Sha256};
use shared_types::Transaction;

/// Compute SHA-256 of data as lowercase hex
#[inline]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Canonical JSON of a transaction sequence.
///
/// Field order follows the `Transaction` declaration order.
pub fn canonical_transactions(transactions: &[Transaction]) -> String {
    // Strings and numbers only, serializing into a String cannot fail.
    serde_json::to_string(transactions).unwrap_or_default()
}

/// Every fingerprint input except the nonce.
///
/// The miner builds this once and appends each candidate nonce to it.
pub fn seal_preimage(block: &Block) -> String {
    format!(
        "{}{}{}{}",
        block.index,
        block.timestamp,
        canonical_transactions(&block.transactions),
        block.previous_hash
    )
}

/// Fingerprint of a preimage completed with `nonce`
#[inline]
pub fn fingerprint_with_nonce(preimage: &str, nonce: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hasher.update(nonce.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Fingerprint of a block's current state.
///
/// Pure: the block's own `hash` field is not an input.
pub fn fingerprint(block: &Block) -> String {
    fingerprint_with_nonce(&seal_preimage(block), block.nonce)
}
