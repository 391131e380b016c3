//! Engine settings and environment variable handling
//!
//! The engine itself takes these values as explicit parameters; only the
//! demo binary reads the environment, and only here. There is no global
//! configuration singleton.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

use crate::arbitrage::DEFAULT_OPTIMIZER_ITERATIONS;
use crate::errors::{EngineError, EngineResult};

// Scanning constants
pub const DEFAULT_PROBE_AMOUNT: Decimal = dec!(1000);
pub const DEFAULT_MIN_PROFIT_USD: Decimal = dec!(10);
pub const DEFAULT_MIN_PROFIT_PERCENTAGE: Decimal = dec!(0.5);
/// Fraction of the input that net profit must exceed (0.1%).
pub const DEFAULT_MIN_PROFIT_THRESHOLD: Decimal = dec!(0.001);
/// The pairwise scan is quadratic; snapshot sets beyond this are logged.
pub const MAX_SCAN_POOLS: usize = 64;

// Sizing constants
pub const DEFAULT_MAX_TRADE_INPUT: Decimal = dec!(10000);

/// Thresholds and probe settings for one scanner instance.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub probe_amount: Decimal,
    pub min_profit_usd: Decimal,
    pub min_profit_percentage: Decimal,
    pub min_profit_threshold: Decimal,
    /// Gas cost charged against every probe evaluation, in input-token units.
    pub gas_cost: Decimal,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            probe_amount: DEFAULT_PROBE_AMOUNT,
            min_profit_usd: DEFAULT_MIN_PROFIT_USD,
            min_profit_percentage: DEFAULT_MIN_PROFIT_PERCENTAGE,
            min_profit_threshold: DEFAULT_MIN_PROFIT_THRESHOLD,
            gas_cost: Decimal::ZERO,
        }
    }
}

impl ScannerConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.probe_amount <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("probe_amount must be positive, got {}", self.probe_amount),
            });
        }
        if self.gas_cost < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("gas_cost must be non-negative, got {}", self.gas_cost),
            });
        }
        Ok(())
    }
}

/// Full demo-binary configuration, read from the environment once at
/// startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub optimizer_iterations: u32,
    pub max_trade_input: Decimal,
    pub scan_interval_secs: u64,
    pub hash_algorithm: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            scanner: ScannerConfig {
                probe_amount: env::var("PROBE_AMOUNT")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .filter(|v| *v > Decimal::ZERO)
                    .unwrap_or(DEFAULT_PROBE_AMOUNT),
                min_profit_usd: env::var("MIN_PROFIT_USD")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(DEFAULT_MIN_PROFIT_USD),
                min_profit_percentage: env::var("MIN_PROFIT_PERCENTAGE")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(DEFAULT_MIN_PROFIT_PERCENTAGE),
                min_profit_threshold: env::var("MIN_PROFIT_THRESHOLD")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(DEFAULT_MIN_PROFIT_THRESHOLD),
                gas_cost: env::var("GAS_COST")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(Decimal::ZERO)
                    .max(Decimal::ZERO),
            },
            optimizer_iterations: env::var("OPTIMIZER_ITERATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_OPTIMIZER_ITERATIONS),
            max_trade_input: env::var("MAX_TRADE_INPUT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_MAX_TRADE_INPUT),
            scan_interval_secs: env::var("SCAN_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            hash_algorithm: env::var("BUNDLE_HASH_ALGORITHM")
                .unwrap_or_else(|_| "sha256".to_string()),
        }
    }
}
