//! Route profit calculation

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::amm::{price_impact, simulate_swap};
use crate::types::{ArbitrageResult, HopTrace, SwapRoute};

/// Chains swap simulations along a caller-selected route and reports the
/// round-trip economics.
#[derive(Debug, Clone, Copy)]
pub struct ProfitCalculator {
    /// Fraction of the input that net profit must exceed for a result to be
    /// marked profitable, e.g. 0.001 for 0.1%.
    min_profit_threshold: Decimal,
}

impl Default for ProfitCalculator {
    fn default() -> Self {
        ProfitCalculator { min_profit_threshold: dec!(0.001) }
    }
}

impl ProfitCalculator {
    pub fn new(min_profit_threshold: Decimal) -> Self {
        ProfitCalculator { min_profit_threshold }
    }

    /// Feed `amount_in` through the route, hop by hop, output of one hop
    /// becoming the input of the next.
    ///
    /// An empty linear chain degenerates to `final_output = amount_in`,
    /// i.e. a guaranteed loss of exactly `gas_cost`.
    pub fn calculate(
        &self,
        amount_in: Decimal,
        route: &SwapRoute,
        gas_cost: Decimal,
    ) -> ArbitrageResult {
        let mut current_amount = amount_in;
        let mut hops = Vec::with_capacity(route.hop_count());

        for hop in route.hops() {
            let output = simulate_swap(current_amount, hop.reserve_in, hop.reserve_out, hop.fee);
            let impact = price_impact(current_amount, hop.reserve_in, hop.reserve_out);
            hops.push(HopTrace { input: current_amount, output, price_impact: impact });
            current_amount = output;
        }

        let gross_profit = current_amount - amount_in;
        let net_profit = gross_profit - gas_cost;
        let profit_percentage = if amount_in > Decimal::ZERO {
            net_profit / amount_in * dec!(100)
        } else {
            Decimal::ZERO
        };

        ArbitrageResult {
            input_amount: amount_in,
            final_output: current_amount,
            gross_profit,
            net_profit,
            profit_percentage,
            gas_cost,
            is_profitable: net_profit > self.min_profit_threshold * amount_in,
            hops,
        }
    }
}
