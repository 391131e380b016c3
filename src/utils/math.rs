//! Mathematical utility functions

use rust_decimal::prelude::*;

/// Convert a float measurement into the fixed-point decimal domain.
///
/// All internal arithmetic is `Decimal`; floats cross into it only through
/// this boundary. Non-finite or unrepresentable values map to zero.
pub fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}
