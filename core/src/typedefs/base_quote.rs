use ammliq_amm_core::instructions::liquidity::FixedSide;

/// A side of the pool's pair. Which mint is base is fixed per pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Base,
    Quote,
}

impl Side {
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Base => Self::Quote,
            Self::Quote => Self::Base,
        }
    }
}

impl From<Side> for FixedSide {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Base => Self::Base,
            Side::Quote => Self::Quote,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseQuote<T> {
    pub base: T,
    pub quote: T,
}

impl<T> BaseQuote<T> {
    #[inline]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::Base => &self.base,
            Side::Quote => &self.quote,
        }
    }

    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    #[inline]
    pub fn try_map<R, E>(self, f: impl FnMut(T) -> Result<R, E>) -> Result<BaseQuote<R>, E> {
        let [base, quote] = [self.base, self.quote].map(f);
        let base = base?;
        let quote = quote?;
        Ok(BaseQuote { base, quote })
    }

    #[inline]
    pub fn map<R>(self, f: impl FnMut(T) -> R) -> BaseQuote<R> {
        let [base, quote] = [self.base, self.quote].map(f);
        BaseQuote { base, quote }
    }
}

impl<T: PartialEq> BaseQuote<T> {
    /// `None` if `val` is neither side.
    /// Base takes priority if both sides are equal.
    #[inline]
    pub fn side_of(&self, val: &T) -> Option<Side> {
        if self.base == *val {
            Some(Side::Base)
        } else if self.quote == *val {
            Some(Side::Quote)
        } else {
            None
        }
    }
}
