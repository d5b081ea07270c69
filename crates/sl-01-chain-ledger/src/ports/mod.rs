//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (API exposed to the cascade and the runtime)
//! - `outbound.rs` - Driven ports (chain persistence, clock)

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerApi;
pub use outbound::{ChainStore, SystemTimeSource, TimeSource};
