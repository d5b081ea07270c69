//! Circuit breaker guarding the ticket oracle
//!
//! - **Closed**: calls flow through
//! - **Open**: oracle unhealthy, calls fail fast as `ORACLE_MISS`
//! - **Half-Open**: probing recovery after `open_timeout`
//!
//! ```ignore
//! if breaker.should_allow() {
//!     match oracle.verify_reservation(&key).await {
//!         Ok(v) => { breaker.record_success(); v }
//!         Err(_) => { breaker.record_failure(); false }
//!     }
//! } else {
//!     false
//! }
//! ```

use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Circuit breaker configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures before opening
    pub failure_threshold: u32,
    /// Successes in half-open before closing
    pub success_threshold: u32,
    /// Wait before an open circuit lets a trial call through
    pub open_timeout: Duration,
    /// Disabled breakers always allow
    pub enabled: bool,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            success_threshold: 2,
            open_timeout: Duration::from_secs(30),
            enabled: true,
        }
    }
}

/// Circuit breaker state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircuitState {
    /// Normal operation
    Closed,
    /// Failing fast
    Open,
    /// Testing recovery
    HalfOpen,
}

#[derive(Debug)]
struct Circuit {
    state: CircuitState,
    failure_count: u32,
    success_count: u32,
    opened_at: Option<Instant>,
    total_failures: u64,
    total_successes: u64,
}

impl Default for Circuit {
    fn default() -> Self {
        Self {
            state: CircuitState::Closed,
            failure_count: 0,
            success_count: 0,
            opened_at: None,
            total_failures: 0,
            total_successes: 0,
        }
    }
}

/// Counters exposed for diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircuitStats {
    /// Current state
    pub state: CircuitState,
    /// Consecutive failures
    pub failure_count: u32,
    /// Failures since start
    pub total_failures: u64,
    /// Successes since start
    pub total_successes: u64,
}

/// Breaker for one downstream dependency
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    circuit: Mutex<Circuit>,
}

impl CircuitBreaker {
    /// Create a closed breaker
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            circuit: Mutex::new(Circuit::default()),
        }
    }

    /// Whether a call may go out now.
    ///
    /// An open circuit whose timeout has elapsed moves to half-open and
    /// allows the trial call.
    pub fn should_allow(&self) -> bool {
        if !self.config.enabled {
            return true;
        }

        let mut circuit = self.circuit.lock();
        match circuit.state {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let elapsed = circuit
                    .opened_at
                    .map(|t| t.elapsed() >= self.config.open_timeout)
                    .unwrap_or(true);
                if elapsed {
                    circuit.state = CircuitState::HalfOpen;
                    circuit.success_count = 0;
                    tracing::info!("[sl-02] Oracle circuit half-open, probing");
                }
                elapsed
            }
        }
    }

    /// Record a call that answered (either way)
    pub fn record_success(&self) {
        if !self.config.enabled {
            return;
        }

        let mut circuit = self.circuit.lock();
        circuit.total_successes += 1;

        match circuit.state {
            CircuitState::Closed => circuit.failure_count = 0,
            CircuitState::HalfOpen => {
                circuit.success_count += 1;
                if circuit.success_count >= self.config.success_threshold {
                    circuit.state = CircuitState::Closed;
                    circuit.failure_count = 0;
                    circuit.success_count = 0;
                    tracing::info!("[sl-02] Oracle recovered, circuit closed");
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Record a failed call
    pub fn record_failure(&self) {
        if !self.config.enabled {
            return;
        }

        let mut circuit = self.circuit.lock();
        circuit.total_failures += 1;
        circuit.failure_count += 1;

        match circuit.state {
            CircuitState::Closed if circuit.failure_count >= self.config.failure_threshold => {
                circuit.state = CircuitState::Open;
                circuit.opened_at = Some(Instant::now());
                tracing::warn!(
                    "[sl-02] Oracle circuit opened after {} failures",
                    circuit.failure_count
                );
            }
            CircuitState::HalfOpen => {
                circuit.state = CircuitState::Open;
                circuit.opened_at = Some(Instant::now());
                circuit.success_count = 0;
                tracing::warn!("[sl-02] Oracle trial call failed, circuit re-opened");
            }
            _ => {}
        }
    }

    /// Current state
    pub fn state(&self) -> CircuitState {
        self.circuit.lock().state
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CircuitStats {
        let circuit = self.circuit.lock();
        CircuitStats {
            state: circuit.state,
            failure_count: circuit.failure_count,
            total_failures: circuit.total_failures,
            total_successes: circuit.total_successes,
        }
    }

    /// Force the circuit closed
    pub fn reset(&self) {
        let mut circuit = self.circuit.lock();
        circuit.state = CircuitState::Closed;
        circuit.failure_count = 0;
        circuit.success_count = 0;
        circuit.opened_at = None;
        tracing::info!("[sl-02] Oracle circuit manually reset");
    }
}
