//! Domain entities for the verification cascade

use serde::{Deserialize, Serialize};
use shared_types::{EpochMillis, ReservationKey};
use std::fmt;

/// A reservation record held by the external document store.
///
/// The cascade only ever sets `verified` and `block_index`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Film (screening) identifier
    pub film_id: String,
    /// Holder
    pub user_id: String,
    /// Seat within the screening
    pub seat_number: u32,
    /// Confirmed by a previous verification or payment
    pub verified: bool,
    /// Ledger block that recorded the purchase, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_index: Option<u64>,
    /// Hold expiry for unpaid reservations, owned by the booking flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<EpochMillis>,
}

impl Reservation {
    /// An unverified hold with no expiry
    pub fn pending(film_id: impl Into<String>, user_id: impl Into<String>, seat_number: u32) -> Self {
        Self {
            film_id: film_id.into(),
            user_id: user_id.into(),
            seat_number,
            verified: false,
            block_index: None,
            expires_at: None,
        }
    }

    /// Builder: mark as already verified
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// The (film, user, seat) triple
    pub fn key(&self) -> ReservationKey {
        ReservationKey::new(&self.film_id, &self.user_id, self.seat_number)
    }
}

/// Position of a request in the cascade.
///
/// ```text
/// UNCHECKED ─┬─ NOT_FOUND
///            ├─ LOCAL_HIT
///            └─ LOCAL_MISS ─┬─ LEDGER_HIT
///                           └─ LEDGER_MISS ─┬─ ORACLE_HIT
///                                           └─ ORACLE_MISS
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CascadeState {
    /// Nothing looked at yet
    Unchecked,
    /// No reservation record exists
    NotFound,
    /// Record already verified
    LocalHit,
    /// Record exists but unverified
    LocalMiss,
    /// Ledger holds a matching transaction
    LedgerHit,
    /// Ledger has no match (or could not be read)
    LedgerMiss,
    /// Oracle confirmed the ticket
    OracleHit,
    /// Oracle denied, failed, timed out or was skipped
    OracleMiss,
}

impl CascadeState {
    /// Whether the cascade stops here
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::LocalHit | Self::LedgerHit | Self::OracleHit | Self::OracleMiss
        )
    }

    /// Whether this terminal state means "verified"
    pub fn is_verified(self) -> bool {
        matches!(self, Self::LocalHit | Self::LedgerHit | Self::OracleHit)
    }
}

impl fmt::Display for CascadeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unchecked => "UNCHECKED",
            Self::NotFound => "NOT_FOUND",
            Self::LocalHit => "LOCAL_HIT",
            Self::LocalMiss => "LOCAL_MISS",
            Self::LedgerHit => "LEDGER_HIT",
            Self::LedgerMiss => "LEDGER_MISS",
            Self::OracleHit => "ORACLE_HIT",
            Self::OracleMiss => "ORACLE_MISS",
        };
        f.write_str(s)
    }
}

/// The stage that confirmed a reservation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationSource {
    /// The reservation record itself
    Local,
    /// A ledger transaction
    Ledger {
        /// Block holding the transaction
        block_index: u64,
    },
    /// The smart-contract oracle
    Oracle,
}

impl VerificationSource {
    /// Terminal state reached through this source
    pub fn terminal_state(self) -> CascadeState {
        match self {
            Self::Local => CascadeState::LocalHit,
            Self::Ledger { .. } => CascadeState::LedgerHit,
            Self::Oracle => CascadeState::OracleHit,
        }
    }

    /// Block index to record, for ledger hits
    pub fn block_index(self) -> Option<u64> {
        match self {
            Self::Ledger { block_index } => Some(block_index),
            _ => None,
        }
    }

    /// Whether the record must be written back
    pub fn needs_write_back(self) -> bool {
        !matches!(self, Self::Local)
    }
}

/// Result of one cascade run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Final answer
    pub verified: bool,
    /// Where the cascade stopped
    pub terminal_state: CascadeState,
    /// Block index, for ledger hits
    pub block_index: Option<u64>,
    /// Whether the positive result is recorded on the reservation
    pub persisted: bool,
}

impl VerificationOutcome {
    /// No reservation record
    pub fn not_found() -> Self {
        Self {
            verified: false,
            terminal_state: CascadeState::NotFound,
            block_index: None,
            persisted: false,
        }
    }

    /// Every stage missed
    pub fn unverified() -> Self {
        Self {
            verified: false,
            terminal_state: CascadeState::OracleMiss,
            block_index: None,
            persisted: false,
        }
    }

    /// Confirmed by `source`
    pub fn confirmed(source: VerificationSource, persisted: bool) -> Self {
        Self {
            verified: true,
            terminal_state: source.terminal_state(),
            block_index: source.block_index(),
            persisted,
        }
    }
}
