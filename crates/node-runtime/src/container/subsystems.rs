//! # Subsystem Container
//!
//! Holds both subsystem services and the adapters behind their ports.
//!
//! ## Initialization Order
//!
//! ```text
//! Level 0: Chain store (file or memory)
//! Level 1: Ledger service (sl-01)
//! Level 2: Verification service (sl-02), reading the ledger through LedgerApi
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use sl_01_chain_ledger::{
    ChainStore, FileChainStore, LedgerApi, LedgerError, LedgerService, StoreError,
};
use sl_02_verification::{
    InMemoryReservationRepository, ReservationOracle, ReservationRepository, UnconfiguredOracle,
    VerificationError, VerificationService,
};

use crate::container::config::{ConfigError, NodeConfig};

/// Errors raised while assembling the container.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Chain store could not be opened.
    #[error("chain store: {0}")]
    Store(#[from] StoreError),

    /// Ledger service rejected its configuration.
    #[error("ledger: {0}")]
    Ledger(#[from] LedgerError),

    /// Verification service rejected its configuration.
    #[error("verification: {0}")]
    Verification(#[from] VerificationError),
}

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Node configuration.
    pub config: NodeConfig,

    /// Chain Ledger (Subsystem 1)
    pub ledger: Arc<dyn LedgerApi>,

    /// Reservation records consulted and updated by the cascade.
    ///
    /// The document store is external to this node; records are held in
    /// memory and fed by the host application.
    pub reservations: Arc<InMemoryReservationRepository>,

    /// Verification Cascade (Subsystem 2)
    pub verification: Arc<VerificationService>,
}

impl SubsystemContainer {
    /// Open the file-backed chain under `config.data_dir` and wire everything.
    ///
    /// No ticket contract client ships with the node, so the oracle stage
    /// fails closed until one is supplied through [`Self::assemble`].
    pub fn open(config: NodeConfig) -> Result<Self, ContainerError> {
        config.validate()?;

        let store = Arc::new(FileChainStore::open_in_dir(&config.data_dir)?);
        info!("[sl-01] Chain store at {}", store.path().display());

        warn!("[sl-02] No ticket contract configured, oracle stage fails closed");
        Self::assemble(config, store, UnconfiguredOracle)
    }

    /// Wire the services over an existing store and oracle.
    ///
    /// The verification service bounds oracle calls by
    /// `verification.oracle_timeout`.
    pub fn assemble<S, O>(
        config: NodeConfig,
        store: Arc<S>,
        oracle: O,
    ) -> Result<Self, ContainerError>
    where
        S: ChainStore + 'static,
        O: ReservationOracle + 'static,
    {
        config.validate()?;

        let ledger: Arc<dyn LedgerApi> =
            Arc::new(LedgerService::new(store, config.ledger.clone())?);
        let reservations = Arc::new(InMemoryReservationRepository::new());
        let repository: Arc<dyn ReservationRepository> = reservations.clone();

        let verification = Arc::new(VerificationService::new(
            repository,
            Arc::clone(&ledger),
            Arc::new(oracle),
            config.verification.clone(),
        )?);

        Ok(Self {
            config,
            ledger,
            reservations,
            verification,
        })
    }
}
