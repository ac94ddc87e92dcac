use crate::typedefs::{
    keys::{AmmKeys, MarketKeys, UserKeys},
    pool_variant::PoolVariant,
};

pub mod add;
pub mod remove;

/// Every account a liquidity instruction may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IxKeys<'a> {
    pub amm: &'a AmmKeys,
    pub market: &'a MarketKeys,
    pub user: &'a UserKeys,
    pub token_program: &'a [u8; 32],

    /// Only referenced by stable pools
    pub model_data: &'a [u8; 32],
}

/// Account list of an instruction whose layout depends on [`PoolVariant`].
///
/// Each variant is a complete, separately declared layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantAccs<S, T> {
    Standard(S),
    Stable(T),
}

impl<S, T> VariantAccs<S, T> {
    #[inline]
    pub const fn variant(&self) -> PoolVariant {
        match self {
            Self::Standard(_) => PoolVariant::Standard,
            Self::Stable(_) => PoolVariant::Stable,
        }
    }

    #[inline]
    pub const fn program_version(&self) -> u8 {
        self.variant().version()
    }
}

impl<E, S: AsRef<[E]>, T: AsRef<[E]>> AsRef<[E]> for VariantAccs<S, T> {
    #[inline]
    fn as_ref(&self) -> &[E] {
        match self {
            Self::Standard(s) => s.as_ref(),
            Self::Stable(t) => t.as_ref(),
        }
    }
}
