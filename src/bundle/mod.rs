//! Merkle commitment over transaction bundles

pub mod builder;
pub mod merkle;

pub use builder::*;
pub use merkle::*;
