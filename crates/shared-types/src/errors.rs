//! # Error Types
//!
//! Validation errors raised before a transaction may enter the ledger.

use thiserror::Error;

/// Reasons a transaction is rejected before it is appended.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required identifier was empty or whitespace.
    #[error("Missing identifier: {field} must not be empty")]
    EmptyIdentifier { field: &'static str },

    /// Price was negative.
    #[error("Invalid price: {price} is negative")]
    NegativePrice { price: f64 },

    /// Price was NaN or infinite and cannot be serialized canonically.
    #[error("Invalid price: value is not a finite number")]
    NonFinitePrice,
}
