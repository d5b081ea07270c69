//! # Inbound Ports (Driving Ports)

use crate::domain::VerificationOutcome;
use crate::error::Result;
use async_trait::async_trait;
use shared_types::ReservationKey;

/// Primary API for reservation verification.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Whether the (film, user, seat) reservation is verified.
    ///
    /// Fail-closed: any error along the way answers `false`.
    async fn run_verification_cascade(&self, film_id: &str, user_id: &str, seat_number: u32)
        -> bool;

    /// Run the cascade and report where it stopped.
    ///
    /// ## Errors
    ///
    /// - `Repository`: the reservation record could not be read
    async fn verify_reservation(&self, key: &ReservationKey) -> Result<VerificationOutcome>;
}
