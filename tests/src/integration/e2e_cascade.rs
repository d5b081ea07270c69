//! # End-to-End Verification Cascade
//!
//! Runs the cascade through the node's own wiring
//! (`SubsystemContainer::assemble`), over an in-memory chain:
//!
//! ```text
//! reservation record ──miss──▶ ledger (sl-01) ──miss──▶ oracle (timeout-bounded)
//!        │                          │                         │
//!     LOCAL_HIT                 LEDGER_HIT               ORACLE_HIT / ORACLE_MISS
//! ```

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use node_runtime::{NodeConfig, SubsystemContainer};
    use shared_types::{ReservationKey, Transaction};
    use sl_01_chain_ledger::InMemoryChainStore;
    use sl_02_verification::{
        CascadeState, OracleError, Reservation, ReservationOracle, UnconfiguredOracle,
        VerificationApi,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Oracle with a fixed answer and a shared call counter.
    struct FixedOracle {
        answer: Result<bool, OracleError>,
        delay: Duration,
        calls: Arc<AtomicUsize>,
    }

    impl FixedOracle {
        fn new(answer: Result<bool, OracleError>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let oracle = Self {
                answer,
                delay: Duration::ZERO,
                calls: Arc::clone(&calls),
            };
            (oracle, calls)
        }

        fn slow(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    #[async_trait]
    impl ReservationOracle for FixedOracle {
        async fn verify_reservation(&self, _key: &ReservationKey) -> Result<bool, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.answer.clone()
        }
    }

    fn node_config() -> NodeConfig {
        let defaults = NodeConfig::default();
        NodeConfig {
            ledger: defaults.ledger.clone().with_difficulty(1),
            verification: defaults
                .verification
                .clone()
                .with_oracle_timeout(Duration::from_millis(100)),
            ..defaults
        }
    }

    fn assemble<O: ReservationOracle + 'static>(oracle: O) -> SubsystemContainer {
        SubsystemContainer::assemble(node_config(), Arc::new(InMemoryChainStore::new()), oracle)
            .unwrap()
    }

    fn key(seat: u32) -> ReservationKey {
        ReservationKey::new("F1", "U1", seat)
    }

    // =========================================================================
    // LEDGER STAGE
    // =========================================================================

    #[tokio::test]
    async fn test_purchase_on_ledger_confirms_reservation() {
        let (oracle, oracle_calls) = FixedOracle::new(Ok(true));
        let node = assemble(oracle);

        node.ledger
            .append_transaction(Transaction::purchase("U1", "F1", 5, 10.0, 1))
            .await
            .unwrap();
        node.reservations.insert(Reservation::pending("F1", "U1", 5));

        let outcome = node.verification.verify_reservation(&key(5)).await.unwrap();
        assert!(outcome.verified);
        assert_eq!(outcome.terminal_state, CascadeState::LedgerHit);
        assert_eq!(outcome.block_index, Some(0));
        assert!(outcome.persisted);
        assert_eq!(oracle_calls.load(Ordering::SeqCst), 0);

        let record = node.reservations.get(&key(5)).unwrap();
        assert!(record.verified);
        assert_eq!(record.block_index, Some(0));

        // Second run stops at the record
        let again = node.verification.verify_reservation(&key(5)).await.unwrap();
        assert_eq!(again.terminal_state, CascadeState::LocalHit);
    }

    #[tokio::test]
    async fn test_cascade_never_appends() {
        let node = assemble(UnconfiguredOracle);
        node.ledger
            .append_transaction(Transaction::purchase("U1", "F1", 5, 10.0, 1))
            .await
            .unwrap();
        node.reservations.insert(Reservation::pending("F1", "U1", 5));
        node.reservations.insert(Reservation::pending("F1", "U1", 6));

        assert!(node.verification.run_verification_cascade("F1", "U1", 5).await);
        assert!(!node.verification.run_verification_cascade("F1", "U1", 6).await);

        let summary = node.ledger.chain_summary().await.unwrap();
        assert_eq!(summary.block_count, 1);
    }

    // =========================================================================
    // ORACLE STAGE
    // =========================================================================

    #[tokio::test]
    async fn test_oracle_confirms_when_ledger_misses() {
        let (oracle, oracle_calls) = FixedOracle::new(Ok(true));
        let node = assemble(oracle);
        node.reservations.insert(Reservation::pending("F1", "U1", 7));

        let outcome = node.verification.verify_reservation(&key(7)).await.unwrap();
        assert_eq!(outcome.terminal_state, CascadeState::OracleHit);
        assert_eq!(outcome.block_index, None);
        assert_eq!(oracle_calls.load(Ordering::SeqCst), 1);

        let record = node.reservations.get(&key(7)).unwrap();
        assert!(record.verified);
        assert_eq!(record.block_index, None);
    }

    #[tokio::test]
    async fn test_unconfigured_oracle_fails_closed() {
        let node = assemble(UnconfiguredOracle);
        node.reservations.insert(Reservation::pending("F1", "U1", 7));

        let outcome = node.verification.verify_reservation(&key(7)).await.unwrap();
        assert!(!outcome.verified);
        assert_eq!(outcome.terminal_state, CascadeState::OracleMiss);
        assert!(!node.reservations.get(&key(7)).unwrap().verified);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_oracle_is_bounded_by_node_timeout() {
        let (oracle, oracle_calls) = FixedOracle::new(Ok(true));
        let node = assemble(oracle.slow(Duration::from_secs(30)));
        node.reservations.insert(Reservation::pending("F1", "U1", 7));

        let outcome = node.verification.verify_reservation(&key(7)).await.unwrap();
        assert_eq!(outcome.terminal_state, CascadeState::OracleMiss);
        assert_eq!(oracle_calls.load(Ordering::SeqCst), 1);
        assert!(!node.reservations.get(&key(7)).unwrap().verified);
    }

    // =========================================================================
    // NO RECORD
    // =========================================================================

    #[tokio::test]
    async fn test_missing_record_skips_ledger_and_oracle() {
        let (oracle, oracle_calls) = FixedOracle::new(Ok(true));
        let node = assemble(oracle);
        node.ledger
            .append_transaction(Transaction::purchase("U1", "F1", 5, 10.0, 1))
            .await
            .unwrap();

        let outcome = node.verification.verify_reservation(&key(5)).await.unwrap();
        assert_eq!(outcome.terminal_state, CascadeState::NotFound);
        assert!(!outcome.verified);
        assert_eq!(oracle_calls.load(Ordering::SeqCst), 0);
        assert!(node.reservations.is_empty());
    }
}
