//! AMM Arbitrage Engine - deterministic arbitrage math and bundle commitment
//!
//! Estimates profitable round-trip and multi-hop routes across
//! constant-product liquidity pools, sizes inputs with a bounded search,
//! ranks opportunities with risk/confidence scores, and commits winning
//! transaction sets to a Merkle root with verifiable inclusion proofs.
//!
//! The engine performs no network or disk I/O: pool snapshots come from an
//! external feed, and bundle delivery belongs to a `BundleRelay`
//! implementation outside this crate's core.

pub mod amm;
pub mod arbitrage;
pub mod bundle;
pub mod config;
pub mod errors;
pub mod registry;
pub mod scanner;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::{EngineError, EngineResult};
pub use types::*;
