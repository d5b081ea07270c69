//! Configuration types for the verification cascade

use crate::domain::CircuitBreakerConfig;
use crate::error::{Result, VerificationError};
use std::env;
use std::time::Duration;

/// Runtime configuration for the verification service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationConfig {
    /// Upper bound on a single oracle call
    pub oracle_timeout: Duration,

    /// Oracle circuit breaker
    pub circuit_breaker: CircuitBreakerConfig,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            oracle_timeout: crate::DEFAULT_ORACLE_TIMEOUT,
            circuit_breaker: CircuitBreakerConfig::default(),
        }
    }
}

impl VerificationConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SL_ORACLE_TIMEOUT_MS`: oracle call bound in milliseconds (default: 5000)
    /// - `SL_ORACLE_CIRCUIT_ENABLED`: enable the circuit breaker (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let oracle_timeout = env::var("SL_ORACLE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.oracle_timeout);

        let enabled = env::var("SL_ORACLE_CIRCUIT_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(defaults.circuit_breaker.enabled);

        Self {
            oracle_timeout,
            circuit_breaker: CircuitBreakerConfig {
                enabled,
                ..defaults.circuit_breaker
            },
        }
    }

    /// Set the oracle call bound
    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    /// Set the circuit breaker configuration
    pub fn with_circuit_breaker(mut self, circuit_breaker: CircuitBreakerConfig) -> Self {
        self.circuit_breaker = circuit_breaker;
        self
    }

    /// Reject values the service cannot operate with
    pub fn validate(&self) -> Result<()> {
        if self.oracle_timeout.is_zero() {
            return Err(VerificationError::InvalidConfig(
                "oracle_timeout must be positive".to_string(),
            ));
        }
        let cb = &self.circuit_breaker;
        if cb.enabled && (cb.failure_threshold == 0 || cb.success_threshold == 0) {
            return Err(VerificationError::InvalidConfig(
                "circuit breaker thresholds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
