//! Configuration for the scanning and bundling engine

pub mod settings;

pub use settings::*;
