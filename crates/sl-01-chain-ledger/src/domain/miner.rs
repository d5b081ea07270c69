//! Proof-of-work nonce search
//!
//! CPU-bound and unbounded. Callers in async code run [`mine`] on the
//! blocking pool (`tokio::task::spawn_blocking`).

use super::entities::Block;
use super::fingerprint::{fingerprint_with_nonce, seal_preimage};
use crate::error::{LedgerError, Result};
use crate::MAX_DIFFICULTY;

/// Check if a hex hash starts with `difficulty` `'0'` characters
#[inline]
pub fn meets_difficulty(hash: &str, difficulty: usize) -> bool {
    hash.len() >= difficulty && hash.bytes().take(difficulty).all(|b| b == b'0')
}

/// Seal a block by searching for a nonce whose fingerprint meets `difficulty`.
///
/// The hash is first recomputed for the incoming nonce; if that already
/// satisfies the target the block is returned unchanged. Otherwise the nonce
/// is incremented until it does.
///
/// ## Errors
///
/// - `InvalidConfig`: `difficulty` exceeds [`MAX_DIFFICULTY`], which no
///   hex digest can meet
#[tracing::instrument(skip(block), fields(index = block.index))]
pub fn mine(mut block: Block, difficulty: usize) -> Result<Block> {
    if difficulty > MAX_DIFFICULTY {
        return Err(LedgerError::InvalidConfig(format!(
            "difficulty {} exceeds maximum {}",
            difficulty, MAX_DIFFICULTY
        )));
    }

    let preimage = seal_preimage(&block);
    block.hash = fingerprint_with_nonce(&preimage, block.nonce);

    let mut attempts: u64 = 1;
    while !meets_difficulty(&block.hash, difficulty) {
        block.nonce = block.nonce.wrapping_add(1);
        block.hash = fingerprint_with_nonce(&preimage, block.nonce);
        attempts += 1;
    }

    tracing::debug!(
        nonce = block.nonce,
        attempts,
        "[sl-01] Block #{} sealed: {}",
        block.index,
        block.hash
    );

    Ok(block)
}
