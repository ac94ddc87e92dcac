use core::{error::Error, fmt::Display};

use sanctum_u64_ratio::{Ceil, Ratio};

use crate::typedefs::{
    base_quote::{BaseQuote, Side},
    mint::normalize_mint,
    slippage::Slippage,
    token::{Token, TokenAmount},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairAmountArgs {
    /// The pool's mints and decimals
    pub pool_tokens: BaseQuote<Token>,

    /// Current reserves in raw units
    pub reserves: BaseQuote<u64>,

    /// The amount the caller is fixing exactly
    pub amount: TokenAmount,

    /// The token whose amount is to be derived
    pub another: Token,

    pub slippage: Slippage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairAmount {
    /// Proportional amount of the other token at the current reserve ratio
    pub another: TokenAmount,

    /// `another` inflated by slippage. The most the depositor
    /// should authorize for the other side.
    pub max_another: TokenAmount,

    /// Pool side `amount` was resolved to
    pub fixed_side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairAmountErr {
    MintNotInPool { mint: [u8; 32] },
    SameMint { mint: [u8; 32] },
    ZeroReserve { side: Side },
    Overflow,
}

impl Display for PairAmountErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            // mints are rendered by the std layer
            Self::MintNotInPool { .. } => f.write_str("mint not in pool"),
            Self::SameMint { .. } => f.write_str("both amounts are of the same pool side"),
            Self::ZeroReserve { side } => f.write_fmt(format_args!("{side:?} reserve is zero")),
            Self::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

impl Error for PairAmountErr {}

pub type PairAmountResult = Result<PairAmount, PairAmountErr>;

/// Computes the amount of `another` that must accompany `amount`
/// for a deposit at the pool's current reserve ratio.
///
/// The derived amount is rounded up so that the deposit never under-funds
/// the other side relative to the live ratio.
pub fn quote_pair_amount(
    PairAmountArgs {
        pool_tokens,
        reserves,
        amount: TokenAmount {
            token: fixed_token,
            amt,
        },
        another,
        slippage,
    }: PairAmountArgs,
) -> PairAmountResult {
    let pool_mints = pool_tokens.map(|t| t.mint);
    let fixed_mint = normalize_mint(&fixed_token.mint);
    let another_mint = normalize_mint(&another.mint);

    let fixed_side = pool_mints
        .side_of(&fixed_mint)
        .ok_or(PairAmountErr::MintNotInPool {
            mint: fixed_token.mint,
        })?;
    let another_side = fixed_side.other();
    if *pool_mints.get(another_side) != another_mint {
        return Err(if another_mint == fixed_mint {
            PairAmountErr::SameMint { mint: another.mint }
        } else {
            PairAmountErr::MintNotInPool { mint: another.mint }
        });
    }

    let (another_amt, max_another_amt) = if amt == 0 {
        (0, 0)
    } else {
        let fixed_reserve = *reserves.get(fixed_side);
        if fixed_reserve == 0 {
            return Err(PairAmountErr::ZeroReserve { side: fixed_side });
        }
        let derived = Ceil(Ratio {
            n: *reserves.get(another_side),
            d: fixed_reserve,
        })
        .apply(amt)
        .ok_or(PairAmountErr::Overflow)?;
        let max = slippage
            .apply_upper(derived)
            .ok_or(PairAmountErr::Overflow)?;
        (derived, max)
    };

    let another_token = Token {
        mint: another.mint,
        decimals: pool_tokens.get(another_side).decimals,
    };

    Ok(PairAmount {
        another: TokenAmount::new(another_token, another_amt),
        max_another: TokenAmount::new(another_token, max_another_amt),
        fixed_side,
    })
}
