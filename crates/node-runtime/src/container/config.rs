//! # Node Configuration
//!
//! Unified configuration for both subsystems and the runtime.

use sl_01_chain_ledger::{LedgerConfig, LedgerError};
use sl_02_verification::{VerificationConfig, VerificationError};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Directory holding `blocks.jsonl`.
    pub data_dir: PathBuf,
    /// Ledger (subsystem 01) configuration.
    pub ledger: LedgerConfig,
    /// Verification (subsystem 02) configuration.
    pub verification: VerificationConfig,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            ledger: LedgerConfig::default(),
            verification: VerificationConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `SL_DATA_DIR`: chain directory (default: `data`)
    /// - `SL_LOG_LEVEL`, then `RUST_LOG`: log filter (default: `info`)
    /// - `SL_LEDGER_*`: see `LedgerConfig::from_env`
    /// - `SL_ORACLE_*`: see `VerificationConfig::from_env`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            data_dir: env::var("SL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            ledger: LedgerConfig::from_env(),
            verification: VerificationConfig::from_env(),
            log_level: env::var("SL_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    }

    /// Validate every subsystem section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ledger.validate()?;
        self.verification.validate()?;
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ledger section rejected.
    #[error("ledger configuration: {0}")]
    Ledger(#[from] LedgerError),

    /// Verification section rejected.
    #[error("verification configuration: {0}")]
    Verification(#[from] VerificationError),

    /// `SL_DATA_DIR` set to an empty string.
    #[error("data directory must not be empty")]
    EmptyDataDir,
}
