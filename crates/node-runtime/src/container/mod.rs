//! # Subsystem Container
//!
//! Holds the ledger and verification services with their adapters wired in.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, NodeConfig};
pub use subsystems::{ContainerError, SubsystemContainer};
