//! Arbitrage opportunity records and scoring types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::Pool;

/// Execution risk bucket derived from slippage and liquidity depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Heuristic quality metrics for one opportunity. A score, not a guarantee.
#[derive(Debug, Clone, Serialize)]
pub struct OpportunityMetrics {
    pub profit_usd: Decimal,
    pub profit_percentage: Decimal,
    /// 0..=100.
    pub confidence_score: Decimal,
    pub risk_level: RiskLevel,
    /// Estimated execution slippage, in percent.
    pub slippage_estimate: Decimal,
    /// Combined liquidity across both pools.
    pub liquidity_depth: Decimal,
    pub gas_estimate: u64,
    pub execution_time_estimate_ms: u64,
}

/// Identifying subset of a pool snapshot carried on an opportunity record.
#[derive(Debug, Clone, Serialize)]
pub struct PoolRef {
    pub dex_id: String,
    pub address: String,
    pub token0: String,
    pub token1: String,
}

impl From<&Pool> for PoolRef {
    fn from(pool: &Pool) -> Self {
        PoolRef {
            dex_id: pool.dex_id.clone(),
            address: pool.address.clone(),
            token0: pool.token0.clone(),
            token1: pool.token1.clone(),
        }
    }
}

/// A ranked scan survivor, handed to the presentation/execution layer and
/// discarded after the cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub buy_pool: PoolRef,
    pub sell_pool: PoolRef,
    pub input_amount: Decimal,
    pub expected_output: Decimal,
    pub profit: Decimal,
    pub metrics: OpportunityMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn opportunity_record_serializes_to_json() {
        let pool_ref = PoolRef {
            dex_id: "quickswap".to_string(),
            address: "0xpool".to_string(),
            token0: "WETH".to_string(),
            token1: "USDC".to_string(),
        };
        let opportunity = Opportunity {
            id: "op-1".to_string(),
            timestamp: Utc::now(),
            buy_pool: pool_ref.clone(),
            sell_pool: pool_ref,
            input_amount: dec!(1000),
            expected_output: dec!(1042.5),
            profit: dec!(42.5),
            metrics: OpportunityMetrics {
                profit_usd: dec!(42.5),
                profit_percentage: dec!(4.25),
                confidence_score: dec!(70),
                risk_level: RiskLevel::Medium,
                slippage_estimate: dec!(0.9),
                liquidity_depth: dec!(10000),
                gas_estimate: 300_000,
                execution_time_estimate_ms: 150,
            },
        };

        let record = serde_json::to_string(&opportunity).expect("serializable record");
        assert!(record.contains(r#""risk_level":"medium""#));
        assert!(record.contains(r#""profit":"42.5""#));
        assert!(record.contains(r#""dex_id":"quickswap""#));
    }
}
