//! Liquidity pool snapshot types

use rust_decimal::Decimal;
use serde::Serialize;

/// One AMM pool's state at snapshot time. Snapshots come from an external
/// feed once per scan cycle and are never mutated by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Pool {
    pub dex_id: String,
    pub address: String,
    pub token0: String,
    pub token1: String,
    pub reserve0: Decimal,
    pub reserve1: Decimal,
    /// Swap fee as a fraction, e.g. 0.003 for 0.3%. Must satisfy 0 <= fee < 1.
    pub fee: Decimal,
    pub liquidity: Decimal,
}

impl Pool {
    /// Spot price of `token` in terms of the opposite token.
    /// Defined only when both reserves are positive.
    pub fn price(&self, token: &str) -> Option<Decimal> {
        if self.reserve0 <= Decimal::ZERO || self.reserve1 <= Decimal::ZERO {
            return None;
        }
        if token == self.token0 {
            Some(self.reserve1 / self.reserve0)
        } else if token == self.token1 {
            Some(self.reserve0 / self.reserve1)
        } else {
            None
        }
    }

    pub fn tokens(&self) -> (&str, &str) {
        (&self.token0, &self.token1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pool(reserve0: Decimal, reserve1: Decimal) -> Pool {
        Pool {
            dex_id: "quickswap".to_string(),
            address: "0xpool".to_string(),
            token0: "WETH".to_string(),
            token1: "USDC".to_string(),
            reserve0,
            reserve1,
            fee: dec!(0.003),
            liquidity: dec!(100000),
        }
    }

    #[test]
    fn price_is_opposite_reserve_over_this_reserve() {
        let p = pool(dec!(100), dec!(200000));
        assert_eq!(p.price("WETH"), Some(dec!(2000)));
        assert_eq!(p.price("USDC"), Some(dec!(0.0005)));
    }

    #[test]
    fn tokens_returns_the_pair_in_listed_order() {
        let p = pool(dec!(100), dec!(200000));
        assert_eq!(p.tokens(), ("WETH", "USDC"));
    }

    #[test]
    fn price_undefined_for_drained_pool_or_foreign_token() {
        let p = pool(dec!(0), dec!(200000));
        assert_eq!(p.price("WETH"), None);
        let p = pool(dec!(100), dec!(200000));
        assert_eq!(p.price("DAI"), None);
    }
}
