//! Arbitrage profit calculation and input sizing

pub mod calculator;
pub mod optimizer;

pub use calculator::*;
pub use optimizer::*;
