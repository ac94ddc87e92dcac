use crate::err::UnknownFixedSideErr;

pub mod add;
pub mod remove;

/// Which of the pool's two sides the depositor specified exactly.
/// The other side is the max the depositor is willing to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedSide {
    Base,
    Quote,
}

impl FixedSide {
    #[inline]
    pub const fn to_u64(self) -> u64 {
        match self {
            Self::Base => 0,
            Self::Quote => 1,
        }
    }

    #[inline]
    pub const fn try_from_u64(v: u64) -> Result<Self, UnknownFixedSideErr> {
        match v {
            0 => Ok(Self::Base),
            1 => Ok(Self::Quote),
            actual => Err(UnknownFixedSideErr { actual }),
        }
    }
}
