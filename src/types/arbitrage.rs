//! Swap route and arbitrage result types

use rust_decimal::Decimal;
use serde::Serialize;

use super::Pool;

/// One venue's reserves at simulation time. Immutable: simulation never
/// writes back the post-trade reserves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwapHop {
    pub reserve_in: Decimal,
    pub reserve_out: Decimal,
    pub fee: Decimal,
}

impl SwapHop {
    pub fn new(reserve_in: Decimal, reserve_out: Decimal, fee: Decimal) -> Self {
        SwapHop { reserve_in, reserve_out, fee }
    }

    /// The same venue viewed from the opposite trade direction.
    pub fn reversed(&self) -> Self {
        SwapHop {
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
            fee: self.fee,
        }
    }
}

/// Path-construction strategy, chosen explicitly by the caller.
///
/// The two variants are distinct conventions and are never inferred from
/// hop count: a two-hop `LinearChain` and a `RoundTrip` over the same two
/// venues price differently, because the round trip sells back through the
/// reversed reserve pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SwapRoute {
    /// Each hop's output feeds the next hop's input directly; models routing
    /// through a cycle of pools back to the origin token. May be empty.
    LinearChain(Vec<SwapHop>),
    /// Buy on one venue, then sell the acquired token back on another.
    /// Both hops are given in the same token orientation; the walk applies
    /// the `(reserve_out, reserve_in)` reversal to the sell side.
    RoundTrip { buy: SwapHop, sell: SwapHop },
}

impl SwapRoute {
    /// Round trip built from two pool snapshots: buy on `buy`, sell the
    /// acquired token back on `sell`. When the sell pool lists the pair in
    /// the opposite order its reserves are re-oriented first, so either
    /// ordering prices identically.
    pub fn round_trip_from_pools(buy: &Pool, sell: &Pool) -> Self {
        let (sell_reserve0, sell_reserve1) = if sell.token0 == buy.token0 {
            (sell.reserve0, sell.reserve1)
        } else {
            (sell.reserve1, sell.reserve0)
        };
        SwapRoute::RoundTrip {
            buy: SwapHop::new(buy.reserve0, buy.reserve1, buy.fee),
            sell: SwapHop::new(sell_reserve0, sell_reserve1, sell.fee),
        }
    }

    /// The hops actually walked by the calculator, with the round-trip
    /// sell-side reversal applied.
    pub fn hops(&self) -> Vec<SwapHop> {
        match self {
            SwapRoute::LinearChain(hops) => hops.clone(),
            SwapRoute::RoundTrip { buy, sell } => vec![*buy, sell.reversed()],
        }
    }

    pub fn hop_count(&self) -> usize {
        match self {
            SwapRoute::LinearChain(hops) => hops.len(),
            SwapRoute::RoundTrip { .. } => 2,
        }
    }
}

/// Per-hop simulation record.
#[derive(Debug, Clone, Serialize)]
pub struct HopTrace {
    pub input: Decimal,
    pub output: Decimal,
    pub price_impact: Decimal,
}

/// Outcome of feeding an input amount through a route.
///
/// Invariants: `gross_profit = final_output - input_amount`,
/// `net_profit = gross_profit - gas_cost`, and `profit_percentage` is zero
/// whenever `input_amount` is non-positive.
#[derive(Debug, Clone, Serialize)]
pub struct ArbitrageResult {
    pub input_amount: Decimal,
    pub final_output: Decimal,
    pub gross_profit: Decimal,
    pub net_profit: Decimal,
    pub profit_percentage: Decimal,
    pub gas_cost: Decimal,
    pub is_profitable: bool,
    pub hops: Vec<HopTrace>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_trip_walk_reverses_the_sell_side() {
        let buy = SwapHop::new(dec!(100000), dec!(50000), dec!(0.003));
        let sell = SwapHop::new(dec!(99000), dec!(51000), dec!(0.003));
        let route = SwapRoute::RoundTrip { buy, sell };

        let hops = route.hops();
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0], buy);
        assert_eq!(hops[1].reserve_in, dec!(51000));
        assert_eq!(hops[1].reserve_out, dec!(99000));
    }

    #[test]
    fn linear_chain_walks_hops_unchanged() {
        let hops = vec![
            SwapHop::new(dec!(1000), dec!(2000), dec!(0.003)),
            SwapHop::new(dec!(3000), dec!(4000), dec!(0.001)),
        ];
        let route = SwapRoute::LinearChain(hops.clone());
        assert_eq!(route.hops(), hops);
        assert_eq!(route.hop_count(), 2);
    }
}
