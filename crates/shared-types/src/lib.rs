//! # Shared Types Crate
//!
//! Entities shared by every Seat-Ledger subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Transaction` and `ReservationKey` are defined
//!   once here; the ledger and the verification cascade never redefine them.
//! - **Stable Wire Shape**: the serde representation of `Transaction` is part
//!   of every block fingerprint, so field names and order are fixed.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
