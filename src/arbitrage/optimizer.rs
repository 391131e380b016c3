//! Bounded input-size search
//!
//! The net-profit curve over input size on a constant-product route is
//! assumed unimodal: it rises while the price gap dominates, then falls as
//! reserve depletion and fees take over. The search is a fixed-iteration
//! hill climb over that curve, not a solver; it keeps the best evaluation
//! seen rather than trusting the final window.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::arbitrage::ProfitCalculator;
use crate::types::{ArbitrageResult, SwapRoute};

pub const DEFAULT_OPTIMIZER_ITERATIONS: u32 = 25;
const MAX_OPTIMIZER_ITERATIONS: u32 = 64;

/// Search outcome: the best input size found and its full result.
#[derive(Debug, Clone)]
pub struct OptimizedInput {
    pub input_amount: Decimal,
    pub result: ArbitrageResult,
}

#[derive(Debug, Clone, Copy)]
pub struct InputOptimizer {
    calculator: ProfitCalculator,
    iterations: u32,
}

impl InputOptimizer {
    pub fn new(calculator: ProfitCalculator, iterations: u32) -> Self {
        InputOptimizer {
            calculator,
            iterations: iterations.clamp(1, MAX_OPTIMIZER_ITERATIONS),
        }
    }

    /// Search `[0.001, max_input]` for a profit-maximizing input size.
    ///
    /// Each iteration evaluates the window midpoint and a probe at
    /// `mid * 1.1` (capped at the upper bound); the window shifts toward
    /// whichever did better. Both evaluations count toward the best seen,
    /// so the best-found profit is monotonically non-decreasing in the
    /// iteration budget. Never errors: a degenerate route converges to its
    /// constant loss.
    pub fn optimize(
        &self,
        route: &SwapRoute,
        max_input: Decimal,
        gas_cost: Decimal,
    ) -> OptimizedInput {
        let mut low = dec!(0.001);
        let mut high = max_input;
        if low >= high {
            low = high / dec!(10);
        }

        let mut best_amount = low;
        let mut best: Option<ArbitrageResult> = None;

        for _ in 0..self.iterations {
            let mid = (low + high) / dec!(2);
            let result = self.calculator.calculate(mid, route, gas_cost);

            let probe_amount = (mid * dec!(1.1)).min(high);
            let probe = self.calculator.calculate(probe_amount, route, gas_cost);

            if best.as_ref().is_none_or(|b| result.net_profit > b.net_profit) {
                best_amount = mid;
                best = Some(result.clone());
            }
            if best.as_ref().is_none_or(|b| probe.net_profit > b.net_profit) {
                best_amount = probe_amount;
                best = Some(probe.clone());
            }

            if probe.net_profit > result.net_profit {
                low = mid;
            } else {
                high = mid;
            }
        }

        let result = best.unwrap_or_else(|| self.calculator.calculate(low, route, gas_cost));
        OptimizedInput { input_amount: best_amount, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SwapHop;

    fn profitable_route() -> SwapRoute {
        SwapRoute::RoundTrip {
            buy: SwapHop::new(dec!(50000), dec!(100000), dec!(0.003)),
            sell: SwapHop::new(dec!(100000), dec!(50000), dec!(0.003)),
        }
    }

    #[test]
    fn finds_better_sizing_than_naive_probe() {
        let optimizer = InputOptimizer::new(ProfitCalculator::default(), 30);
        let route = profitable_route();

        let optimized = optimizer.optimize(&route, dec!(50000), dec!(5));
        let naive = ProfitCalculator::default().calculate(dec!(1000), &route, dec!(5));

        assert!(optimized.result.net_profit >= naive.net_profit);
        assert!(optimized.result.is_profitable);
        assert!(optimized.input_amount <= dec!(50000));
    }

    #[test]
    fn best_profit_non_decreasing_in_iteration_budget() {
        let route = profitable_route();
        let mut previous = None;

        for iterations in [5u32, 10, 15, 20, 25, 30] {
            let optimizer = InputOptimizer::new(ProfitCalculator::default(), iterations);
            let found = optimizer.optimize(&route, dec!(50000), dec!(5)).result.net_profit;
            if let Some(prev) = previous {
                assert!(
                    found >= prev,
                    "budget {iterations} regressed: {found} < {prev}"
                );
            }
            previous = Some(found);
        }
    }

    #[test]
    fn empty_route_converges_to_constant_loss() {
        let optimizer = InputOptimizer::new(ProfitCalculator::default(), 20);
        let optimized = optimizer.optimize(&SwapRoute::LinearChain(vec![]), dec!(1000), dec!(7));

        assert_eq!(optimized.result.net_profit, dec!(-7));
        assert!(!optimized.result.is_profitable);
    }

    #[test]
    fn tiny_max_input_shrinks_lower_bound() {
        let optimizer = InputOptimizer::new(ProfitCalculator::default(), 10);
        let optimized = optimizer.optimize(&profitable_route(), dec!(0.0005), Decimal::ZERO);
        assert!(optimized.input_amount <= dec!(0.0005));
    }

    #[test]
    fn iteration_budget_is_clamped() {
        // zero budget still performs one evaluation pass
        let optimizer = InputOptimizer::new(ProfitCalculator::default(), 0);
        let optimized = optimizer.optimize(&profitable_route(), dec!(10000), Decimal::ZERO);
        assert!(optimized.result.net_profit > Decimal::ZERO);
    }
}
