//! # Seat-Ledger Subsystem Benchmarks
//!
//! | Subsystem | Operation | Scales with |
//! |-----------|-----------|-------------|
//! | sl-01 Chain Ledger | mine | 16^difficulty |
//! | sl-01 Chain Ledger | lookup miss, integrity check | chain length |
//! | sl-02 Verification | cascade local / ledger hit | scan depth |

use criterion::{criterion_group, criterion_main, Criterion};
use sl_tests::benchmarks::{sl_01_chain_ledger, sl_02_verification};

fn chain_ledger(c: &mut Criterion) {
    sl_01_chain_ledger::register_benchmarks(c);
}

fn verification(c: &mut Criterion) {
    sl_02_verification::register_benchmarks(c);
}

criterion_group!(benches, chain_ledger, verification);
criterion_main!(benches);
