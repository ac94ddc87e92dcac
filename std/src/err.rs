use std::{error::Error, fmt::Display};

use ammliq_core::{
    quote::{pair::PairAmountErr, withdraw::RemoveLiqQuoteErr},
    typedefs::{
        amount_side::UnknownAmountSideErr, pool_variant::PoolVariant, ui_amount::UiAmountErr,
    },
};

use crate::interface::pk_str;

// Re-exports to maintain -core compat
pub use ammliq_core::err::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiqErr {
    InvalidAmount {
        field: &'static str,
        value: String,
        err: UiAmountErr,
    },
    LiqIx(LiqIxErr),
    MissingTokenAcc { mint: [u8; 32] },
    PairAmount(PairAmountErr),

    /// Pool snapshot's program id is not the one configured for its version
    ProgramMismatch {
        variant: PoolVariant,
        expected: [u8; 32],
        actual: [u8; 32],
    },

    RemoveLiqQuote(RemoveLiqQuoteErr),

    /// The token account resolver failed
    Resolver(String),

    UnknownAmountSide(UnknownAmountSideErr),
}

impl Display for LiqErr {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount { field, value, err } => {
                write!(f, "{field}: {err} ({value:?})")
            }
            Self::LiqIx(e) => e.fmt(f),
            Self::MissingTokenAcc { mint } => {
                write!(f, "no token account found for mint {}", pk_str(mint))
            }
            Self::PairAmount(PairAmountErr::MintNotInPool { mint }) => {
                write!(f, "mint {} not in pool", pk_str(mint))
            }
            Self::PairAmount(PairAmountErr::SameMint { mint }) => {
                write!(f, "both amounts are of mint {}", pk_str(mint))
            }
            Self::PairAmount(e) => e.fmt(f),
            Self::ProgramMismatch {
                variant,
                expected,
                actual,
            } => write!(
                f,
                "v{} pool owned by {}, expected {}",
                variant.version(),
                pk_str(actual),
                pk_str(expected)
            ),
            Self::RemoveLiqQuote(e) => e.fmt(f),
            Self::Resolver(msg) => write!(f, "token account resolver: {msg}"),
            Self::UnknownAmountSide(e) => e.fmt(f),
        }
    }
}

impl Error for LiqErr {}

impl From<LiqIxErr> for LiqErr {
    #[inline]
    fn from(e: LiqIxErr) -> Self {
        Self::LiqIx(e)
    }
}

impl From<PairAmountErr> for LiqErr {
    #[inline]
    fn from(e: PairAmountErr) -> Self {
        Self::PairAmount(e)
    }
}

impl From<RemoveLiqQuoteErr> for LiqErr {
    #[inline]
    fn from(e: RemoveLiqQuoteErr) -> Self {
        Self::RemoveLiqQuote(e)
    }
}

impl From<UnknownAmountSideErr> for LiqErr {
    #[inline]
    fn from(e: UnknownAmountSideErr) -> Self {
        Self::UnknownAmountSide(e)
    }
}
