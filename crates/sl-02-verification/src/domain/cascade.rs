//! Pure pieces of the cascade
//!
//! Each stage answers `Some(source)` to stop the cascade with a positive
//! result, or `None` to hand over to the next stage. The I/O-bound stages
//! live in the service and follow the same shape.

use super::entities::{Reservation, VerificationSource};
use sl_01_chain_ledger::TransactionMatch;

/// Stage 1: the reservation record is already verified.
pub fn local_stage(reservation: &Reservation) -> Option<VerificationSource> {
    reservation.verified.then_some(VerificationSource::Local)
}

/// Stage 2 (pure part): a ledger match confirms the reservation.
pub fn ledger_source(found: Option<&TransactionMatch>) -> Option<VerificationSource> {
    found.map(|m| VerificationSource::Ledger {
        block_index: m.block_index,
    })
}

/// Stage 3 (pure part): only an explicit `true` from the oracle confirms.
pub fn oracle_source(answer: bool) -> Option<VerificationSource> {
    answer.then_some(VerificationSource::Oracle)
}
