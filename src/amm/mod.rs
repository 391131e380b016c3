//! Constant-product AMM simulation

pub mod simulator;

pub use simulator::*;
