//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (verification API)
//! - `outbound.rs` - Driven ports (reservation store, ticket oracle)

pub mod inbound;
pub mod outbound;

pub use inbound::VerificationApi;
pub use outbound::{ReservationOracle, ReservationRepository};
