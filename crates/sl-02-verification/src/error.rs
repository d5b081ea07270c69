//! Error types for the verification subsystem

use thiserror::Error;

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, VerificationError>;

/// Failures of the external ticket oracle.
///
/// The cascade never propagates these: every variant is an `ORACLE_MISS`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Transport or node failure
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    /// The call did not answer in time
    #[error("Oracle timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured bound
        timeout_ms: u64,
    },

    /// Circuit breaker is failing fast
    #[error("Oracle circuit open")]
    CircuitOpen,

    /// The contract call reverted or returned garbage
    #[error("Contract call failed: {0}")]
    Contract(String),
}

impl OracleError {
    /// Whether the failure should count against the circuit breaker
    pub fn trips_circuit(&self) -> bool {
        !matches!(self, Self::CircuitOpen)
    }
}

/// Errors surfaced by the verification service and its reservation port
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Reservation store failure
    #[error("Reservation repository error: {0}")]
    Repository(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl VerificationError {
    /// Check if retrying the same request may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}
