//! Core data types and structures

pub mod arbitrage;
pub mod bundle;
pub mod opportunity;
pub mod pools;

pub use arbitrage::*;
pub use bundle::*;
pub use opportunity::*;
pub use pools::*;
