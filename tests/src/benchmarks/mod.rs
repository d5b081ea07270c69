//! # Seat-Ledger Benchmarks
//!
//! Each module exposes `register_benchmarks`, driven from
//! `benches/subsystem_benchmarks.rs`.

pub mod sl_01_chain_ledger;
pub mod sl_02_verification;
