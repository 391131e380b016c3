//! Utility functions

pub mod logging;
pub mod math;

pub use logging::*;
pub use math::*;
