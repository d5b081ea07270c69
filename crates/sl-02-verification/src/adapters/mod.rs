//! # Adapters Module
//!
//! - `memory`: in-memory reservation repository
//! - `oracle`: ticket-contract oracle, timeout decorator, fail-closed stub

pub mod memory;
pub mod oracle;

pub use memory::InMemoryReservationRepository;
pub use oracle::{ContractOracle, TicketContract, TicketId, TimeoutOracle, UnconfiguredOracle};
