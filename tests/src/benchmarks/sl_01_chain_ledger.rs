//! # SL-01 Chain Ledger Benchmarks
//!
//! - Proof-of-work cost per difficulty (expected 16^d hashes)
//! - Fingerprint of one block
//! - Newest-first lookup miss over a long chain (full scan)
//! - Full integrity check

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use shared_types::{ReservationKey, Transaction};
use sl_01_chain_ledger::domain::{check_chain, find_in_blocks};
use sl_01_chain_ledger::{build_candidate, fingerprint, mine, Block};
use std::time::Duration;

fn purchase(seat: u32) -> Transaction {
    Transaction::purchase("U1", "F1", seat, 10.0, 1_700_000_000_000)
}

/// Chain of `len` sealed blocks at difficulty 1.
fn build_chain(len: u32) -> Vec<Block> {
    let mut chain: Vec<Block> = Vec::with_capacity(len as usize);
    for seat in 0..len {
        let candidate = build_candidate(chain.last(), purchase(seat), 1_700_000_000_000);
        chain.push(mine(candidate, 1).expect("difficulty 1"));
    }
    chain
}

pub fn bench_mining(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-01-mining");
    group.measurement_time(Duration::from_secs(10));

    for difficulty in [1usize, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new("mine", difficulty),
            &difficulty,
            |b, &difficulty| {
                let mut seat = 0u32;
                b.iter(|| {
                    seat = seat.wrapping_add(1);
                    let candidate = build_candidate(None, purchase(seat), 1_700_000_000_000);
                    black_box(mine(candidate, difficulty).expect("difficulty within bounds"))
                })
            },
        );
    }

    group.finish();
}

pub fn bench_fingerprint(c: &mut Criterion) {
    let block = build_chain(1).remove(0);
    c.bench_function("sl-01-fingerprint", |b| {
        b.iter(|| black_box(fingerprint(black_box(&block))))
    });
}

pub fn bench_lookup_and_integrity(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-01-chain-scan");

    for len in [100u32, 1_000] {
        let chain = build_chain(len);
        let missing = ReservationKey::new("F1", "U2", 0);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("lookup_miss", len), &chain, |b, chain| {
            b.iter(|| black_box(find_in_blocks(chain.iter().rev(), &missing)))
        });
        group.bench_with_input(BenchmarkId::new("check_chain", len), &chain, |b, chain| {
            b.iter(|| black_box(check_chain(chain).is_valid()))
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_mining(c);
    bench_fingerprint(c);
    bench_lookup_and_integrity(c);
}
