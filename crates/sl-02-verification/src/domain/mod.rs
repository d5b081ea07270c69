//! Domain layer - cascade states, outcomes and the oracle circuit breaker
//!
//! ## Entities
//!
//! - [`Reservation`]: external reservation record
//! - [`CascadeState`]: UNCHECKED through ORACLE_HIT / ORACLE_MISS
//! - [`VerificationOutcome`]: answer plus where the cascade stopped

pub mod cascade;
pub mod circuit_breaker;
mod entities;

pub use cascade::{ledger_source, local_stage, oracle_source};
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState, CircuitStats};
pub use entities::*;
