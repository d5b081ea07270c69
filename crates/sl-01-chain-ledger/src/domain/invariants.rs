//! Invariant checkers for the persisted chain
//!
//! Read-only diagnostics. Nothing here repairs a chain.

use super::entities::Block;
use super::fingerprint::fingerprint;
use crate::GENESIS_PREVIOUS_HASH;
use std::fmt;

/// A single broken invariant found in the chain
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Stored hash differs from the re-derived fingerprint
    HashMismatch {
        /// Block index
        index: u64,
        /// Hash stored on the block
        stored: String,
        /// Fingerprint recomputed from the stored fields
        computed: String,
    },

    /// `previousHash` does not point at the preceding block
    BrokenLink {
        /// Block index
        index: u64,
        /// Hash of the preceding block (or `"0"` for genesis)
        expected: String,
        /// `previousHash` stored on the block
        actual: String,
    },

    /// Block sits at a position that does not match its index
    IndexGap {
        /// Position in the ascending chain
        position: u64,
        /// Index stored on the block
        index: u64,
    },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HashMismatch { index, .. } => write!(f, "block {} hash mismatch", index),
            Self::BrokenLink { index, .. } => write!(f, "block {} previousHash mismatch", index),
            Self::IndexGap { position, index } => {
                write!(f, "block at position {} carries index {}", position, index)
            }
        }
    }
}

/// Outcome of a full chain check
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Number of blocks inspected
    pub blocks_checked: u64,

    /// Every violation found, in chain order
    pub violations: Vec<IntegrityViolation>,
}

impl IntegrityReport {
    /// True when no violation was found
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// INVARIANT-1: Seal
/// The stored hash MUST equal the fingerprint of the stored fields.
pub fn check_seal(block: &Block) -> Option<IntegrityViolation> {
    let computed = fingerprint(block);
    if computed != block.hash {
        return Some(IntegrityViolation::HashMismatch {
            index: block.index,
            stored: block.hash.clone(),
            computed,
        });
    }
    None
}

/// INVARIANT-2 / INVARIANT-3: Genesis link and back-link
pub fn check_link(previous: Option<&Block>, block: &Block) -> Option<IntegrityViolation> {
    let expected = previous
        .map(|p| p.hash.as_str())
        .unwrap_or(GENESIS_PREVIOUS_HASH);

    if block.previous_hash != expected {
        return Some(IntegrityViolation::BrokenLink {
            index: block.index,
            expected: expected.to_string(),
            actual: block.previous_hash.clone(),
        });
    }
    None
}

/// Check a chain given in ascending order.
///
/// Chains of length 0 or 1 with a well-formed genesis block are valid. The
/// genesis block is sealed and linked like any other, so a tampered genesis
/// transaction is caught even though no later hash covers its fields.
pub fn check_chain(blocks: &[Block]) -> IntegrityReport {
    let mut report = IntegrityReport {
        blocks_checked: blocks.len() as u64,
        violations: Vec::new(),
    };

    let mut previous: Option<&Block> = None;
    for (position, block) in blocks.iter().enumerate() {
        if block.index != position as u64 {
            report.violations.push(IntegrityViolation::IndexGap {
                position: position as u64,
                index: block.index,
            });
        }
        if let Some(violation) = check_seal(block) {
            report.violations.push(violation);
        }
        if let Some(violation) = check_link(previous, block) {
            report.violations.push(violation);
        }
        previous = Some(block);
    }

    report
}
