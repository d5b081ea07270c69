//! # Seat-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── sl_01_chain_ledger.rs
//! │   └── sl_02_verification.rs
//! │
//! └── integration/      # Cross-subsystem flows
//!     ├── flows.rs          # Ledger append, restart, tamper
//!     └── e2e_cascade.rs    # Reservation → ledger → oracle
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sl-tests
//! cargo test -p sl-tests integration::e2e_cascade
//!
//! # Benchmarks
//! cargo bench -p sl-tests
//! ```

pub mod benchmarks;
pub mod integration;
