//! # SL-02 Verification Benchmarks
//!
//! - Circuit breaker bookkeeping on the hot path
//! - Cascade latency for a local hit and for a ledger hit

use criterion::{black_box, Criterion};
use shared_types::{ReservationKey, Transaction};
use sl_01_chain_ledger::{InMemoryChainStore, LedgerApi, LedgerConfig, LedgerService};
use sl_02_verification::{
    CircuitBreaker, CircuitBreakerConfig, InMemoryReservationRepository, Reservation,
    UnconfiguredOracle, VerificationApi, VerificationConfig, VerificationService,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub fn bench_circuit_breaker(c: &mut Criterion) {
    let breaker = CircuitBreaker::new(CircuitBreakerConfig::default());
    c.bench_function("sl-02-breaker-allow-success", |b| {
        b.iter(|| {
            if breaker.should_allow() {
                breaker.record_success();
            }
            black_box(breaker.state())
        })
    });
}

pub fn bench_cascade(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");

    let (service, repository) = rt.block_on(async {
        let store = Arc::new(InMemoryChainStore::new());
        let ledger = LedgerService::new(store, LedgerConfig::default().with_difficulty(1))
            .expect("ledger");
        for seat in 0..200 {
            ledger
                .append_transaction(Transaction::purchase("U1", "F1", seat, 10.0, 1))
                .await
                .expect("append");
        }

        let repository = Arc::new(InMemoryReservationRepository::new());
        repository.insert(Reservation::pending("F1", "U1", 0).verified());
        let service = VerificationService::new(
            repository.clone(),
            Arc::new(ledger),
            Arc::new(UnconfiguredOracle),
            VerificationConfig::default(),
        )
        .expect("verification");
        (service, repository)
    });

    let mut group = c.benchmark_group("sl-02-cascade");

    let local = ReservationKey::new("F1", "U1", 0);
    group.bench_function("local_hit", |b| {
        b.iter(|| rt.block_on(async { black_box(service.verify_reservation(&local).await) }))
    });

    // Seat 1 sits beyond the scan window; reset the record each time so the
    // ledger stage runs
    let deep = ReservationKey::new("F1", "U1", 1);
    group.bench_function("ledger_hit_full_scan", |b| {
        b.iter(|| {
            repository.insert(Reservation::pending("F1", "U1", 1));
            rt.block_on(async { black_box(service.verify_reservation(&deep).await) })
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_circuit_breaker(c);
    bench_cascade(c);
}
