//! Configuration types for the chain ledger

use crate::error::{LedgerError, Result};
use serde::Deserialize;
use std::env;

/// Runtime configuration for the ledger service
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Leading zero hex characters required of a sealed block hash
    pub difficulty: usize,

    /// Most recent blocks searched before falling through to a full scan
    pub scan_window: usize,

    /// Build-mine-persist attempts before a contended append is reported
    pub max_append_retries: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: crate::DEFAULT_DIFFICULTY,
            scan_window: crate::DEFAULT_SCAN_WINDOW,
            max_append_retries: crate::DEFAULT_MAX_APPEND_RETRIES,
        }
    }
}

impl LedgerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SL_LEDGER_DIFFICULTY`: proof-of-work difficulty (default: 2)
    /// - `SL_LEDGER_SCAN_WINDOW`: recent-first scan window (default: 10)
    /// - `SL_LEDGER_MAX_APPEND_RETRIES`: append attempts under contention (default: 3)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            difficulty: env::var("SL_LEDGER_DIFFICULTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.difficulty),

            scan_window: env::var("SL_LEDGER_SCAN_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scan_window),

            max_append_retries: env::var("SL_LEDGER_MAX_APPEND_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_append_retries),
        }
    }

    /// Set the proof-of-work difficulty
    pub fn with_difficulty(mut self, difficulty: usize) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the recent-first scan window
    pub fn with_scan_window(mut self, scan_window: usize) -> Self {
        self.scan_window = scan_window;
        self
    }

    /// Set the number of append attempts under contention
    pub fn with_max_append_retries(mut self, retries: u32) -> Self {
        self.max_append_retries = retries;
        self
    }

    /// Reject values the service cannot operate with
    pub fn validate(&self) -> Result<()> {
        if self.difficulty > crate::MAX_DIFFICULTY {
            return Err(LedgerError::InvalidConfig(format!(
                "difficulty {} exceeds hash length {}",
                self.difficulty,
                crate::MAX_DIFFICULTY
            )));
        }
        if self.scan_window == 0 {
            return Err(LedgerError::InvalidConfig(
                "scan_window must be at least 1".to_string(),
            ));
        }
        if self.max_append_retries == 0 {
            return Err(LedgerError::InvalidConfig(
                "max_append_retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
