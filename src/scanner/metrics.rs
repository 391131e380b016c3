//! Opportunity scoring heuristics

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{ArbitrageResult, OpportunityMetrics, Pool, RiskLevel};
use crate::utils::decimal_from_f64;

/// Typical gas spend for a two-venue arbitrage transaction.
pub const ARBITRAGE_GAS_ESTIMATE: u64 = 300_000;
/// Target wall-clock time from detection to submission.
pub const EXECUTION_TIME_ESTIMATE_MS: u64 = 150;

/// Score a profitable round-trip result against the two pool snapshots it
/// was computed from.
pub fn compute_metrics(
    result: &ArbitrageResult,
    buy_pool: &Pool,
    sell_pool: &Pool,
) -> OpportunityMetrics {
    let liquidity_depth = buy_pool.liquidity + sell_pool.liquidity;
    let slippage_estimate = Decimal::ONE / (Decimal::ONE + liquidity_depth / dec!(100000));

    OpportunityMetrics {
        profit_usd: result.net_profit,
        profit_percentage: result.profit_percentage,
        confidence_score: confidence_score(result, buy_pool, liquidity_depth),
        risk_level: assess_risk(slippage_estimate, liquidity_depth),
        slippage_estimate,
        liquidity_depth,
        gas_estimate: ARBITRAGE_GAS_ESTIMATE,
        execution_time_estimate_ms: EXECUTION_TIME_ESTIMATE_MS,
    }
}

/// Confidence in 0..=100: base 50, bumped by profit margin, combined
/// liquidity, and depth of the buy-side reserves.
fn confidence_score(result: &ArbitrageResult, buy_pool: &Pool, liquidity_depth: Decimal) -> Decimal {
    let mut score = dec!(50);

    if result.profit_percentage > dec!(5) {
        score += dec!(20);
    } else if result.profit_percentage > dec!(2) {
        score += dec!(10);
    }

    if liquidity_depth > dec!(1000000) {
        score += dec!(20);
    } else if liquidity_depth > dec!(100000) {
        score += dec!(10);
    }

    if buy_pool.reserve0 > dec!(10000) && buy_pool.reserve1 > dec!(10000) {
        score += dec!(10);
    }

    score.min(dec!(100))
}

/// Slippage is in percent; liquidity in the feed's USD-equivalent units.
fn assess_risk(slippage: Decimal, liquidity: Decimal) -> RiskLevel {
    if slippage > dec!(2) || liquidity < dec!(10000) {
        RiskLevel::High
    } else if slippage > dec!(1) || liquidity < dec!(100000) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Dynamic slippage tolerance from a float volatility measurement and pool
/// liquidity, clamped to [0.1%, 5%] (as fractions).
///
/// The volatility reading is the one float input in the engine; it is
/// converted to the fixed-point domain here, at the boundary.
pub fn slippage_tolerance(volatility: f64, liquidity: Decimal) -> Decimal {
    let base_slippage = dec!(0.005);
    let volatility_factor = decimal_from_f64((volatility * 2.0).min(1.0));
    let liquidity_factor = Decimal::ONE / (Decimal::ONE + liquidity / dec!(1000000));
    let dynamic = base_slippage * (Decimal::ONE + volatility_factor) * liquidity_factor;

    dynamic.clamp(dec!(0.001), dec!(0.05))
}
