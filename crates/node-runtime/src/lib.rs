//! # Node Runtime Library
//!
//! Exposes the runtime's modules for testing. The main entry point is the
//! `main.rs` binary.
//!
//! - `container/` - configuration and subsystem wiring
//! - `logging` - `tracing_subscriber` setup
//! - `runtime` - startup integrity check and lifecycle

#![warn(missing_docs)]

pub mod container;
pub mod logging;
pub mod runtime;

pub use container::{ConfigError, ContainerError, NodeConfig, SubsystemContainer};
pub use runtime::{NodeRuntime, StartupReport};
