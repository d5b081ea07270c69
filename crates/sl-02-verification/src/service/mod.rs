//! # Verification Service
//!
//! Runs the verification cascade for one reservation:
//!
//! 1. local record (already verified?)
//! 2. ledger scan through `LedgerApi::find_transaction`
//! 3. ticket oracle, behind a circuit breaker
//!
//! The first positive stage wins and is written back to the record once.
//! The cascade reads the ledger but never appends to it.

mod cascade;

use crate::adapters::TimeoutOracle;
use crate::config::VerificationConfig;
use crate::domain::CircuitBreaker;
use crate::error::Result;
use crate::ports::outbound::{ReservationOracle, ReservationRepository};
use sl_01_chain_ledger::LedgerApi;
use std::sync::Arc;

/// The Verification Service.
pub struct VerificationService {
    /// Reservation records.
    pub(crate) reservations: Arc<dyn ReservationRepository>,
    /// Local ledger, read-only from here.
    pub(crate) ledger: Arc<dyn LedgerApi>,
    /// External authority of last resort, bounded by `oracle_timeout`.
    pub(crate) oracle: TimeoutOracle<Arc<dyn ReservationOracle>>,
    /// Fails fast while the oracle keeps failing.
    pub(crate) breaker: CircuitBreaker,
}

impl VerificationService {
    /// Create a service from its ports.
    ///
    /// Every oracle call is bounded by `config.oracle_timeout`.
    ///
    /// ## Errors
    ///
    /// - `InvalidConfig`: configuration failed validation
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        ledger: Arc<dyn LedgerApi>,
        oracle: Arc<dyn ReservationOracle>,
        config: VerificationConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            reservations,
            ledger,
            oracle: TimeoutOracle::new(oracle, config.oracle_timeout),
            breaker: CircuitBreaker::new(config.circuit_breaker),
        })
    }

    /// The oracle circuit breaker.
    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }
}
