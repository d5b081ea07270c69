//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the verification service. The chain ledger is
//! consumed through its own `LedgerApi` port.

use crate::domain::Reservation;
use crate::error::{OracleError, Result};
use async_trait::async_trait;
use shared_types::ReservationKey;
use std::sync::Arc;

/// The document store holding reservation records.
///
/// The cascade never creates or deletes records.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Record for `key`, if one exists.
    async fn find_reservation(&self, key: &ReservationKey) -> Result<Option<Reservation>>;

    /// Set `verified = true`, and `blockIndex` when given.
    async fn mark_verified(&self, key: &ReservationKey, block_index: Option<u64>) -> Result<()>;
}

/// External authority consulted when the ledger has no record.
///
/// Production: `ContractOracle`. The service bounds every call with
/// `TimeoutOracle`.
#[async_trait]
pub trait ReservationOracle: Send + Sync {
    /// Whether the authority holds a valid ticket for `key`.
    async fn verify_reservation(&self, key: &ReservationKey) -> std::result::Result<bool, OracleError>;
}

#[async_trait]
impl<O: ReservationOracle + ?Sized> ReservationOracle for Arc<O> {
    async fn verify_reservation(&self, key: &ReservationKey) -> std::result::Result<bool, OracleError> {
        (**self).verify_reservation(key).await
    }
}
