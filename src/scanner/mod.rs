//! Pairwise opportunity scanning
//!
//! The scan is quadratic in pool count: every unordered pair of pools is a
//! candidate. The snapshot set fed to one cycle must stay bounded (tens of
//! pools, not thousands) to keep cycle latency acceptable. Pair evaluations
//! are independent and side-effect-free, so callers may shard them across
//! workers and merge with the same final stable sort; this implementation
//! evaluates them sequentially.

pub mod metrics;

pub use metrics::*;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::arbitrage::ProfitCalculator;
use crate::config::{ScannerConfig, MAX_SCAN_POOLS};
use crate::errors::EngineResult;
use crate::types::{Opportunity, Pool, PoolRef, SwapRoute};

pub struct OpportunityScanner {
    config: ScannerConfig,
    calculator: ProfitCalculator,
}

impl OpportunityScanner {
    pub fn new(config: ScannerConfig) -> EngineResult<Self> {
        config.validate()?;
        let calculator = ProfitCalculator::new(config.min_profit_threshold);
        Ok(OpportunityScanner { config, calculator })
    }

    /// Scan one cycle's pool snapshots and return surviving opportunities
    /// ranked by profit, descending.
    ///
    /// Equal-profit opportunities keep first-discovered enumeration order;
    /// the sort is stable by contract, not by accident.
    pub fn scan(&self, pools: &[Pool]) -> Vec<Opportunity> {
        if pools.len() > MAX_SCAN_POOLS {
            warn!(
                pool_count = pools.len(),
                limit = MAX_SCAN_POOLS,
                "Pool snapshot set exceeds the documented scan bound"
            );
        }

        let scan_start = std::time::Instant::now();
        let mut opportunities = Vec::new();

        for (i, buy_pool) in pools.iter().enumerate() {
            for sell_pool in &pools[i + 1..] {
                if !pools_compatible(buy_pool, sell_pool) {
                    continue;
                }
                if let Some(opportunity) = self.analyze_pair(buy_pool, sell_pool) {
                    opportunities.push(opportunity);
                }
            }
        }

        // Vec::sort_by is stable, preserving discovery order on ties.
        opportunities.sort_by(|a, b| b.metrics.profit_usd.cmp(&a.metrics.profit_usd));

        info!(
            pools = pools.len(),
            opportunities = opportunities.len(),
            elapsed_ms = scan_start.elapsed().as_millis() as u64,
            "Scan cycle complete"
        );

        opportunities
    }

    /// Evaluate the round trip buying on `buy_pool` and selling back on
    /// `sell_pool` at the configured probe amount.
    fn analyze_pair(&self, buy_pool: &Pool, sell_pool: &Pool) -> Option<Opportunity> {
        let route = SwapRoute::round_trip_from_pools(buy_pool, sell_pool);
        let result = self.calculator.calculate(
            self.config.probe_amount,
            &route,
            self.config.gas_cost,
        );
        if !result.is_profitable {
            return None;
        }

        let metrics = compute_metrics(&result, buy_pool, sell_pool);
        if metrics.profit_usd < self.config.min_profit_usd
            || metrics.profit_percentage < self.config.min_profit_percentage
        {
            debug!(
                buy = %buy_pool.address,
                sell = %sell_pool.address,
                profit = %metrics.profit_usd,
                "Opportunity below configured thresholds"
            );
            return None;
        }

        Some(Opportunity {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            buy_pool: PoolRef::from(buy_pool),
            sell_pool: PoolRef::from(sell_pool),
            input_amount: self.config.probe_amount,
            expected_output: result.final_output,
            profit: result.net_profit,
            metrics,
        })
    }
}

/// Two pools can be arbitraged when they sit on different DEXes and carry
/// the same token pair, in either order.
fn pools_compatible(a: &Pool, b: &Pool) -> bool {
    if a.dex_id == b.dex_id {
        return false;
    }
    let (a0, a1) = a.tokens();
    let (b0, b1) = b.tokens();
    let same_order = a0 == b0 && a1 == b1;
    let reversed = a0 == b1 && a1 == b0;
    (same_order || reversed) && a0 != a1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pool(
        dex_id: &str,
        address: &str,
        token0: &str,
        token1: &str,
        reserve0: Decimal,
        reserve1: Decimal,
        liquidity: Decimal,
    ) -> Pool {
        Pool {
            dex_id: dex_id.to_string(),
            address: address.to_string(),
            token0: token0.to_string(),
            token1: token1.to_string(),
            reserve0,
            reserve1,
            fee: dec!(0.003),
            liquidity,
        }
    }

    fn scanner() -> OpportunityScanner {
        OpportunityScanner::new(ScannerConfig::default()).expect("valid default config")
    }

    #[test]
    fn compatibility_requires_distinct_dex_and_shared_pair() {
        let a = pool("uniswap", "0xa", "WETH", "USDC", dec!(1), dec!(1), dec!(1));
        let same_dex = pool("uniswap", "0xb", "WETH", "USDC", dec!(1), dec!(1), dec!(1));
        let reversed = pool("sushiswap", "0xc", "USDC", "WETH", dec!(1), dec!(1), dec!(1));
        let disjoint = pool("sushiswap", "0xd", "WETH", "DAI", dec!(1), dec!(1), dec!(1));

        assert!(!pools_compatible(&a, &same_dex));
        assert!(pools_compatible(&a, &reversed));
        assert!(!pools_compatible(&a, &disjoint));
    }

    #[test]
    fn balanced_pools_produce_no_opportunities() {
        // Price gap smaller than the round-trip fee cost.
        let pools = vec![
            pool("uniswap", "0xa", "WETH", "USDC", dec!(100000), dec!(50000), dec!(500000)),
            pool("sushiswap", "0xb", "WETH", "USDC", dec!(100010), dec!(49995), dec!(500000)),
        ];
        assert!(scanner().scan(&pools).is_empty());
    }

    #[test]
    fn skewed_pools_produce_one_opportunity() {
        let pools = vec![
            pool("uniswap", "0xa", "WETH", "USDC", dec!(50000), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xb", "WETH", "USDC", dec!(100000), dec!(50000), dec!(5000)),
        ];

        let found = scanner().scan(&pools);
        assert_eq!(found.len(), 1);

        let opp = &found[0];
        assert_eq!(opp.buy_pool.address, "0xa");
        assert_eq!(opp.sell_pool.address, "0xb");
        assert!(opp.profit > Decimal::ZERO);
        // combined liquidity 10_000 => slippage 1/(1+0.1) ~ 0.91%, depth < 100_000
        assert_eq!(opp.metrics.risk_level, crate::types::RiskLevel::Medium);
        // base 50 + 20 (profit > 5%) + 10 (deep buy-side reserves)
        assert_eq!(opp.metrics.confidence_score, dec!(80));
    }

    #[test]
    fn reversed_token_order_prices_identically() {
        let aligned = vec![
            pool("uniswap", "0xa", "WETH", "USDC", dec!(50000), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xb", "WETH", "USDC", dec!(100000), dec!(50000), dec!(5000)),
        ];
        let reversed = vec![
            pool("uniswap", "0xa", "WETH", "USDC", dec!(50000), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xb", "USDC", "WETH", dec!(50000), dec!(100000), dec!(5000)),
        ];

        let scanner = scanner();
        let a = scanner.scan(&aligned);
        let b = scanner.scan(&reversed);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a[0].profit, b[0].profit);
    }

    #[test]
    fn equal_profit_ties_keep_discovery_order() {
        // Two disjoint pairs with identical reserve skews produce identical
        // profits; ranking must preserve pair-enumeration order.
        let pools = vec![
            pool("uniswap", "0xa", "WETH", "USDC", dec!(50000), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xb", "WETH", "USDC", dec!(100000), dec!(50000), dec!(5000)),
            pool("uniswap", "0xc", "WBTC", "DAI", dec!(50000), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xd", "WBTC", "DAI", dec!(100000), dec!(50000), dec!(5000)),
        ];

        let found = scanner().scan(&pools);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].metrics.profit_usd, found[1].metrics.profit_usd);
        assert_eq!(found[0].buy_pool.address, "0xa");
        assert_eq!(found[1].buy_pool.address, "0xc");
    }

    #[test]
    fn malformed_pool_cannot_abort_the_scan() {
        let pools = vec![
            pool("uniswap", "0xa", "WETH", "USDC", dec!(0), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xb", "WETH", "USDC", dec!(100000), dec!(50000), dec!(5000)),
            pool("uniswap", "0xc", "WBTC", "DAI", dec!(50000), dec!(100000), dec!(5000)),
            pool("sushiswap", "0xd", "WBTC", "DAI", dec!(100000), dec!(50000), dec!(5000)),
        ];

        // The drained pool simulates to zero output and drops out; the
        // healthy pair still surfaces.
        let found = scanner().scan(&pools);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].buy_pool.address, "0xc");
    }
}
