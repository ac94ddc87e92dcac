use core::{error::Error, fmt::Display};

use sanctum_u64_ratio::{Floor, Ratio};

use crate::typedefs::base_quote::BaseQuote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiqQuoteArgs {
    /// LP tokens to burn
    pub lp_amt: u64,

    pub lp_supply: u64,

    /// Current reserves in raw units
    pub reserves: BaseQuote<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoveLiqQuoteErr {
    ZeroSupply,
    ExceedsSupply { lp_amt: u64, lp_supply: u64 },
    Overflow,
}

impl Display for RemoveLiqQuoteErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSupply => f.write_str("lp supply is zero"),
            Self::ExceedsSupply { lp_amt, lp_supply } => f.write_fmt(format_args!(
                "lp amount {lp_amt} exceeds lp supply {lp_supply}"
            )),
            Self::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl Error for RemoveLiqQuoteErr {}

/// Estimated base and quote tokens returned for burning `lp_amt`,
/// rounded down. Excludes any amount the pool has
/// resting on the order book.
pub fn quote_remove_liquidity(
    RemoveLiqQuoteArgs {
        lp_amt,
        lp_supply,
        reserves,
    }: RemoveLiqQuoteArgs,
) -> Result<BaseQuote<u64>, RemoveLiqQuoteErr> {
    if lp_supply == 0 {
        return Err(RemoveLiqQuoteErr::ZeroSupply);
    }
    if lp_amt > lp_supply {
        return Err(RemoveLiqQuoteErr::ExceedsSupply { lp_amt, lp_supply });
    }
    let share = Floor(Ratio {
        n: lp_amt,
        d: lp_supply,
    });
    reserves.try_map(|r| share.apply(r).ok_or(RemoveLiqQuoteErr::Overflow))
}
