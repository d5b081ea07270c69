//! Cascade stages and `VerificationApi` implementation

use super::VerificationService;
use crate::domain::{
    ledger_source, local_stage, oracle_source, VerificationOutcome, VerificationSource,
};
use crate::error::Result;
use crate::ports::inbound::VerificationApi;
use crate::ports::outbound::ReservationOracle;
use async_trait::async_trait;
use shared_types::ReservationKey;

impl VerificationService {
    /// Stage 2: the ledger holds a matching transaction.
    ///
    /// A ledger read failure is a miss; the cascade moves on to the oracle.
    async fn ledger_stage(&self, key: &ReservationKey) -> Option<VerificationSource> {
        match self.ledger.find_transaction(key).await {
            Ok(found) => ledger_source(found.as_ref()),
            Err(e) => {
                tracing::warn!("[sl-02] Ledger lookup failed for {}: {}", key, e);
                None
            }
        }
    }

    /// Stage 3: the oracle confirms. Fail-closed.
    async fn oracle_stage(&self, key: &ReservationKey) -> Option<VerificationSource> {
        if !self.breaker.should_allow() {
            tracing::debug!("[sl-02] Oracle circuit open, skipping {}", key);
            return None;
        }

        match self.oracle.verify_reservation(key).await {
            Ok(answer) => {
                self.breaker.record_success();
                oracle_source(answer)
            }
            Err(e) => {
                if e.trips_circuit() {
                    self.breaker.record_failure();
                }
                tracing::warn!("[sl-02] Oracle verification failed for {}: {}", key, e);
                None
            }
        }
    }

    /// Record a positive result on the reservation.
    ///
    /// Returns whether the write succeeded; a failure never revokes the answer.
    async fn write_back(&self, key: &ReservationKey, source: VerificationSource) -> bool {
        match self
            .reservations
            .mark_verified(key, source.block_index())
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("[sl-02] Could not record verification of {}: {}", key, e);
                false
            }
        }
    }
}

#[async_trait]
impl VerificationApi for VerificationService {
    async fn run_verification_cascade(
        &self,
        film_id: &str,
        user_id: &str,
        seat_number: u32,
    ) -> bool {
        let key = ReservationKey::new(film_id, user_id, seat_number);
        match self.verify_reservation(&key).await {
            Ok(outcome) => outcome.verified,
            Err(e) => {
                tracing::warn!("[sl-02] Verification of {} failed closed: {}", key, e);
                false
            }
        }
    }

    #[tracing::instrument(skip(self), fields(reservation = %key))]
    async fn verify_reservation(&self, key: &ReservationKey) -> Result<VerificationOutcome> {
        let Some(reservation) = self.reservations.find_reservation(key).await? else {
            tracing::info!("[sl-02] {} -> NOT_FOUND", key);
            return Ok(VerificationOutcome::not_found());
        };

        let source = match local_stage(&reservation) {
            Some(source) => Some(source),
            None => match self.ledger_stage(key).await {
                Some(source) => Some(source),
                None => self.oracle_stage(key).await,
            },
        };

        let outcome = match source {
            Some(source) if source.needs_write_back() => {
                let persisted = self.write_back(key, source).await;
                VerificationOutcome::confirmed(source, persisted)
            }
            Some(source) => VerificationOutcome::confirmed(source, true),
            None => VerificationOutcome::unverified(),
        };

        tracing::info!("[sl-02] {} -> {}", key, outcome.terminal_state);
        Ok(outcome)
    }
}
