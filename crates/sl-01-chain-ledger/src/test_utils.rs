//! Shared fixtures for unit tests

use crate::domain::{build_candidate, mine, Block};
use crate::ports::TimeSource;
use shared_types::Transaction;
use std::sync::atomic::{AtomicU64, Ordering};

pub const FIXED_TS: u64 = 1_700_000_000_000;

/// Purchase at price 10.0 with a fixed timestamp
pub fn make_tx(film: &str, user: &str, seat: u32) -> Transaction {
    Transaction::purchase(user, film, seat, 10.0, FIXED_TS)
}

pub fn unsealed_block(index: u64, previous_hash: &str, tx: Transaction) -> Block {
    Block {
        index,
        timestamp: FIXED_TS,
        transactions: vec![tx],
        previous_hash: previous_hash.to_string(),
        hash: String::new(),
        nonce: 0,
    }
}

/// A valid chain of `len` blocks mined at difficulty 1, seats 0..len for F1/U1
pub fn build_chain(len: u32) -> Vec<Block> {
    let mut chain: Vec<Block> = Vec::new();
    for seat in 0..len {
        let candidate = build_candidate(chain.last(), make_tx("F1", "U1", seat), FIXED_TS);
        chain.push(mine(candidate, 1).unwrap());
    }
    chain
}

/// Clock that advances by one millisecond per call
pub struct StepClock(AtomicU64);

impl StepClock {
    pub fn new(start: u64) -> Self {
        Self(AtomicU64::new(start))
    }
}

impl TimeSource for StepClock {
    fn now_millis(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}
