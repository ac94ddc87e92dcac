use core::{error::Error, fmt::Display, str::FromStr};

/// Caller-facing label for the two amounts of a deposit,
/// independent of the pool's base/quote orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountSide {
    A,
    B,
}

impl FromStr for AmountSide {
    type Err = UnknownAmountSideErr;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("a") {
            Ok(Self::A)
        } else if s.eq_ignore_ascii_case("b") {
            Ok(Self::B)
        } else {
            Err(UnknownAmountSideErr)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownAmountSideErr;

impl Display for UnknownAmountSideErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("fixed side must be one of \"a\", \"b\"")
    }
}

impl Error for UnknownAmountSideErr {}
