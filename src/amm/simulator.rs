//! Pure constant-product swap simulation
//!
//! All functions here are total over `Decimal`: numerically invalid domains
//! (non-positive reserves or amounts, zero denominators) return exactly zero
//! instead of erroring, so one malformed pool snapshot cannot abort a scan.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Simulate a single swap against a constant-product pool.
///
/// The fee is deducted from the input before the swap:
/// `amount_out = amount_in * (1 - fee) * reserve_out
///             / (reserve_in + amount_in * (1 - fee))`.
pub fn simulate_swap(
    amount_in: Decimal,
    reserve_in: Decimal,
    reserve_out: Decimal,
    fee: Decimal,
) -> Decimal {
    if reserve_in <= Decimal::ZERO || reserve_out <= Decimal::ZERO || amount_in <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let amount_in_with_fee = amount_in * (Decimal::ONE - fee);
    let denominator = reserve_in + amount_in_with_fee;
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    amount_in_with_fee * reserve_out / denominator
}

/// Percentage deviation of the realized execution price from the pre-trade
/// marginal price, using a fee-less constant-product fill.
///
/// Returns zero when the expected price or the simulated fill is
/// non-positive.
pub fn price_impact(amount_in: Decimal, reserve_in: Decimal, reserve_out: Decimal) -> Decimal {
    if reserve_in <= Decimal::ZERO || reserve_out <= Decimal::ZERO || amount_in <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // x * y = k, filled without fee
    let k = reserve_in * reserve_out;
    let new_reserve_in = reserve_in + amount_in;
    let new_reserve_out = k / new_reserve_in;
    let amount_out = reserve_out - new_reserve_out;

    let expected_price = amount_in / (reserve_out / reserve_in);
    if expected_price <= Decimal::ZERO || amount_out <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let actual_price = amount_in / amount_out;

    (actual_price - expected_price).abs() / expected_price * dec!(100)
}
