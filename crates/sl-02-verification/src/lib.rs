//! # Seat-Ledger - Verification Cascade (Subsystem 02)
//!
//! **Bounded Context:** Reservation confirmation
//!
//! ## Purpose
//!
//! Answers "did this (film, user, seat) purchase really happen?" by asking,
//! in order, the reservation record, the local ledger (subsystem 01) and an
//! external smart-contract oracle. The first positive answer wins and is
//! written back to the record.
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Adapters (Outer)                                   │
//! │  - InMemoryReservationRepository                    │
//! │  - ContractOracle, TimeoutOracle, UnconfiguredOracle│
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports (Middle)                                     │
//! │  - Inbound: VerificationApi                         │
//! │  - Outbound: ReservationRepository,                 │
//! │              ReservationOracle, LedgerApi (sl-01)   │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (Inner - Pure Logic)                        │
//! │  - CascadeState, VerificationOutcome                │
//! │  - Stage functions, CircuitBreaker                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! 1. **Fail-closed**: oracle errors, timeouts and an open circuit are misses
//! 2. **Short-circuit**: a verified record never reaches the ledger or oracle
//! 3. **Read-only ledger**: the cascade never mines or appends
//! 4. **Write-back once**: a positive ledger or oracle answer is recorded once

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

mod config;
mod error;

pub use config::VerificationConfig;
pub use error::{OracleError, Result, VerificationError};

pub use domain::{
    CascadeState, CircuitBreaker, CircuitBreakerConfig, CircuitState, Reservation,
    VerificationOutcome, VerificationSource,
};

pub use ports::{ReservationOracle, ReservationRepository, VerificationApi};

pub use adapters::{
    ContractOracle, InMemoryReservationRepository, TicketContract, TicketId, TimeoutOracle,
    UnconfiguredOracle,
};

pub use service::VerificationService;

use std::time::Duration;

/// Subsystem identifier used in log prefixes
pub const SUBSYSTEM_ID: u8 = 2;

/// Upper bound on one oracle call
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(5);
