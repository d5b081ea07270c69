//! # Integration Tests
//!
//! Flows that cross the ledger (sl-01), the verification cascade (sl-02)
//! and the node runtime's wiring.

mod e2e_cascade;
mod flows;
