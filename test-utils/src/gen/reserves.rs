use proptest::prelude::*;

use crate::u64_strat;

/// Nonzero reserves small enough that `amt * other_reserve` for any `amt: u32`
/// never leaves u64
pub fn reasonable_reserve_strat() -> impl Strategy<Value = u64> {
    1..=u64::from(u32::MAX)
}

prop_compose! {
    /// `(base, quote)` pool reserves
    pub fn reserves_strat()
        (base in reasonable_reserve_strat(), quote in reasonable_reserve_strat()) -> (u64, u64) {
        (base, quote)
    }
}

prop_compose! {
    /// `(lp_supply, lp_amt)` where `lp_amt <= lp_supply`
    pub fn lp_amt_supply_strat()
        (supply in u64_strat(Some((1..=u64::MAX).boxed())))
        (amt in 0..=supply, supply in Just(supply)) -> (u64, u64) {
        (supply, amt)
    }
}
