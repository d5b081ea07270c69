//! # Core Domain Entities
//!
//! - **Ledger**: `Transaction`, `TransactionKind`
//! - **Reservations**: `ReservationKey`

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch.
pub type EpochMillis = u64;

/// What a ledger transaction records about a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// A seat was bought.
    Purchase,
    /// A purchase was refunded.
    Refund,
    /// A ticket moved to another holder.
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionKind::Purchase => "PURCHASE",
            TransactionKind::Refund => "REFUND",
            TransactionKind::Transfer => "TRANSFER",
        };
        f.write_str(s)
    }
}

/// A seat transaction embedded in a ledger block.
///
/// Field declaration order is the canonical serialization order used by the
/// block fingerprint. Do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Buyer identifier.
    pub user_id: String,
    /// Film (screening) identifier.
    pub film_id: String,
    /// Seat number within the screening.
    pub seat_number: u32,
    /// Price paid, in the currency's major unit.
    pub price: f64,
    /// Kind of transaction.
    #[serde(rename = "transactionType")]
    pub kind: TransactionKind,
    /// When the transaction was recorded.
    pub timestamp: EpochMillis,
}

impl Transaction {
    /// Create a transaction of the given kind.
    pub fn new(
        user_id: impl Into<String>,
        film_id: impl Into<String>,
        seat_number: u32,
        price: f64,
        kind: TransactionKind,
        timestamp: EpochMillis,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            film_id: film_id.into(),
            seat_number,
            price,
            kind,
            timestamp,
        }
    }

    /// Create a `PURCHASE` transaction.
    pub fn purchase(
        user_id: impl Into<String>,
        film_id: impl Into<String>,
        seat_number: u32,
        price: f64,
        timestamp: EpochMillis,
    ) -> Self {
        Self::new(
            user_id,
            film_id,
            seat_number,
            price,
            TransactionKind::Purchase,
            timestamp,
        )
    }

    /// Reject transactions that must never reach the ledger.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { field: "userId" });
        }
        if self.film_id.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { field: "filmId" });
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice { price: self.price });
        }
        Ok(())
    }

    /// The (film, user, seat) triple this transaction refers to.
    pub fn key(&self) -> ReservationKey {
        ReservationKey::new(&self.film_id, &self.user_id, self.seat_number)
    }
}

/// Identifies one reservation: a seat held by a user for a film.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationKey {
    pub film_id: String,
    pub user_id: String,
    pub seat_number: u32,
}

impl ReservationKey {
    pub fn new(film_id: impl Into<String>, user_id: impl Into<String>, seat_number: u32) -> Self {
        Self {
            film_id: film_id.into(),
            user_id: user_id.into(),
            seat_number,
        }
    }

    /// Exact match on all three fields.
    pub fn matches(&self, tx: &Transaction) -> bool {
        tx.film_id == self.film_id && tx.user_id == self.user_id && tx.seat_number == self.seat_number
    }
}

impl fmt::Display for ReservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "film={} user={} seat={}",
            self.film_id, self.user_id, self.seat_number
        )
    }
}
