//! Ticket oracle adapters
//!
//! [`ContractOracle`] resolves a reservation against the ticketing smart
//! contract in two steps:
//!
//! 1. `getTicketByFilmAndSeat(film, seat)` yields a ticket id
//! 2. a non-zero id is answered by `isTicketValid(id)`; zero means no ticket
//!
//! If either call fails, the direct `verifyTicket(film, user, seat)` call
//! decides. [`TimeoutOracle`] bounds any oracle; [`UnconfiguredOracle`]
//! stands in when no contract endpoint is configured.

use crate::error::OracleError;
use crate::ports::outbound::ReservationOracle;
use async_trait::async_trait;
use shared_types::ReservationKey;
use std::time::Duration;

/// On-chain ticket identifier. Zero means "no ticket".
pub type TicketId = u64;

/// The contract reads the oracle relies on.
///
/// Implemented by whatever RPC client the deployment uses.
#[async_trait]
pub trait TicketContract: Send + Sync {
    /// Ticket minted for (film, seat), or 0.
    async fn ticket_by_film_and_seat(
        &self,
        film_id: &str,
        seat_number: u32,
    ) -> Result<TicketId, OracleError>;

    /// Whether the ticket is still valid (not refunded).
    async fn is_ticket_valid(&self, ticket_id: TicketId) -> Result<bool, OracleError>;

    /// Direct check of the full (film, user, seat) triple.
    async fn verify_ticket(
        &self,
        film_id: &str,
        user_id: &str,
        seat_number: u32,
    ) -> Result<bool, OracleError>;
}

/// Oracle backed by the ticketing contract.
pub struct ContractOracle<C: TicketContract> {
    contract: C,
}

impl<C: TicketContract> ContractOracle<C> {
    /// Wrap a contract client.
    pub fn new(contract: C) -> Self {
        Self { contract }
    }
}

#[async_trait]
impl<C: TicketContract> ReservationOracle for ContractOracle<C> {
    async fn verify_reservation(&self, key: &ReservationKey) -> Result<bool, OracleError> {
        let by_ticket = match self
            .contract
            .ticket_by_film_and_seat(&key.film_id, key.seat_number)
            .await
        {
            Ok(0) => {
                tracing::debug!("[sl-02] No ticket on chain for {}", key);
                return Ok(false);
            }
            Ok(ticket_id) => self
                .contract
                .is_ticket_valid(ticket_id)
                .await
                .map(|valid| (ticket_id, valid)),
            Err(e) => Err(e),
        };

        match by_ticket {
            Ok((ticket_id, valid)) => {
                tracing::debug!("[sl-02] Ticket {} for {} valid: {}", ticket_id, key, valid);
                Ok(valid)
            }
            Err(e) => {
                tracing::warn!(
                    "[sl-02] Ticket lookup failed for {} ({}), trying direct verification",
                    key,
                    e
                );
                self.contract
                    .verify_ticket(&key.film_id, &key.user_id, key.seat_number)
                    .await
            }
        }
    }
}

/// Bounds every call of the wrapped oracle.
pub struct TimeoutOracle<O> {
    inner: O,
    timeout: Duration,
}

impl<O: ReservationOracle> TimeoutOracle<O> {
    /// Wrap `inner` with a per-call bound.
    pub fn new(inner: O, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<O: ReservationOracle> ReservationOracle for TimeoutOracle<O> {
    async fn verify_reservation(&self, key: &ReservationKey) -> Result<bool, OracleError> {
        match tokio::time::timeout(self.timeout, self.inner.verify_reservation(key)).await {
            Ok(answer) => answer,
            Err(_) => Err(OracleError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

/// Oracle used when no contract endpoint is configured. Always unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredOracle;

#[async_trait]
impl ReservationOracle for UnconfiguredOracle {
    async fn verify_reservation(&self, _key: &ReservationKey) -> Result<bool, OracleError> {
        Err(OracleError::Unavailable(
            "no ticket contract configured".to_string(),
        ))
    }
}
