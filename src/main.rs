//! AMM Arbitrage Engine - demo entry point
//!
//! Runs the full scan → optimize → bundle pipeline over synthetic pool
//! snapshots. Chain connectivity, signing, and relay submission are
//! collaborator concerns; the loop below stands in for all three so the
//! engine can be exercised end to end.

use amm_arb_engine::*;
use anyhow::Result;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing::{info, warn};

use amm_arb_engine::arbitrage::{InputOptimizer, ProfitCalculator};
use amm_arb_engine::bundle::{BundleBuilder, BundleRelay};
use amm_arb_engine::registry::DexRegistry;
use amm_arb_engine::scanner::OpportunityScanner;
use amm_arb_engine::utils::decimal_from_f64;

/// Relay stand-in that logs instead of transmitting.
struct LoggingRelay {
    name: String,
}

impl BundleRelay for LoggingRelay {
    fn submit(&self, bundle: &MerkleBundle, target_block: u64) -> Result<RelayAck> {
        info!(
            relay = %self.name,
            target_block,
            root = bundle.root.as_deref().unwrap_or("<empty>"),
            transactions = bundle.transactions.len(),
            "Would submit bundle"
        );
        Ok(RelayAck { relay: self.name.clone(), target_block })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let _logging_guard = utils::setup_logging()?;
    let config = Config::from_env();

    info!("⚙️  AMM Arbitrage Engine v0.1.0");
    info!("📋 Configuration:");
    info!("   Probe Amount: {}", config.scanner.probe_amount);
    info!("   Min Profit: ${}", config.scanner.min_profit_usd);
    info!("   Min Profit %: {}", config.scanner.min_profit_percentage);
    info!("   Optimizer Iterations: {}", config.optimizer_iterations);
    info!("   Scan Interval: {}s", config.scan_interval_secs);
    info!("   Bundle Hash: {}", config.hash_algorithm);

    let mut registry = DexRegistry::with_default_catalog();
    // Aerodrome snapshots are not part of the synthetic feed.
    registry.disable("aerodrome")?;
    info!("   Active DEX sources: {}", registry.active_count());

    let scanner = OpportunityScanner::new(config.scanner.clone())?;
    let calculator = ProfitCalculator::new(config.scanner.min_profit_threshold);
    let optimizer = InputOptimizer::new(calculator, config.optimizer_iterations);
    let bundle_builder = BundleBuilder::from_algorithm_name(&config.hash_algorithm)?;
    let relay = LoggingRelay { name: "demo-relay".to_string() };

    let mut interval = tokio::time::interval(Duration::from_secs(config.scan_interval_secs));
    let mut target_block: u64 = 21_000_000;

    loop {
        interval.tick().await;
        target_block += 1;

        let pools = sample_snapshots(&registry);
        let opportunities = scanner.scan(&pools);

        let Some(top) = opportunities.first() else {
            continue;
        };
        info!(
            buy = %top.buy_pool.address,
            sell = %top.sell_pool.address,
            profit = %top.profit,
            confidence = %top.metrics.confidence_score,
            risk = ?top.metrics.risk_level,
            "Top opportunity"
        );
        // Full record for downstream consumers, one JSON object per line.
        info!(
            opportunity_id = %top.id,
            record = %serde_json::to_string(top)?,
            "Opportunity record"
        );

        let Some(route) = round_trip_route(&pools, top) else {
            warn!("Top opportunity references pools missing from the snapshot");
            continue;
        };
        let sized = optimizer.optimize(&route, config.max_trade_input, config.scanner.gas_cost);
        info!(
            input = %sized.input_amount,
            net_profit = %sized.result.net_profit,
            "Optimized input size"
        );
        if !sized.result.is_profitable {
            continue;
        }

        // Signing happens upstream of the engine; fake identifiers stand in
        // for pre-signed transactions here.
        let signed_txs = vec![
            format!("0x{}", uuid::Uuid::new_v4().simple()),
            format!("0x{}", uuid::Uuid::new_v4().simple()),
        ];
        let bundle = bundle_builder.build_bundle(&signed_txs);
        relay.submit(&bundle, target_block + 1)?;
    }
}

/// Synthetic per-cycle pool snapshots with a little reserve jitter, filtered
/// by the enabled sources in the registry.
fn sample_snapshots(registry: &DexRegistry) -> Vec<Pool> {
    let mut rng = rand::rng();
    let mut jitter = |reserve: Decimal| {
        reserve * decimal_from_f64(rng.random_range(0.98..1.02))
    };

    let pools = vec![
        Pool {
            dex_id: "uniswap_v3".to_string(),
            address: "0x45dda9cb7c25131df268515131f647d726f50608".to_string(),
            token0: "WETH".to_string(),
            token1: "USDC".to_string(),
            reserve0: jitter(dec!(52000)),
            reserve1: jitter(dec!(98000)),
            fee: dec!(0.003),
            liquidity: dec!(150000),
        },
        Pool {
            dex_id: "quickswap".to_string(),
            address: "0x853ee4b2a13f8a742d64c8f088be7ba2131f670d".to_string(),
            token0: "WETH".to_string(),
            token1: "USDC".to_string(),
            reserve0: jitter(dec!(99000)),
            reserve1: jitter(dec!(51000)),
            fee: dec!(0.003),
            liquidity: dec!(120000),
        },
        Pool {
            dex_id: "sushiswap".to_string(),
            address: "0x34965ba0ac2451a34a0471f04cca3f990b8dea27".to_string(),
            token0: "USDC".to_string(),
            token1: "WETH".to_string(),
            reserve0: jitter(dec!(50500)),
            reserve1: jitter(dec!(100500)),
            fee: dec!(0.003),
            liquidity: dec!(90000),
        },
    ];

    pools
        .into_iter()
        .filter(|pool| registry.is_enabled(&pool.dex_id))
        .collect()
}

/// Rebuild the round-trip route behind an opportunity from the snapshot set.
fn round_trip_route(pools: &[Pool], opportunity: &Opportunity) -> Option<SwapRoute> {
    let buy = pools.iter().find(|p| p.address == opportunity.buy_pool.address)?;
    let sell = pools.iter().find(|p| p.address == opportunity.sell_pool.address)?;
    Some(SwapRoute::round_trip_from_pools(buy, sell))
}
