use core::{error::Error, fmt::Display};

/// Determines the program version and with it the account layout
/// of every liquidity instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolVariant {
    /// Constant-product pool, program version 4
    Standard,

    /// Stable-curve pool, program version 5
    Stable,
}

impl PoolVariant {
    pub const STANDARD_VERSION: u8 = 4;
    pub const STABLE_VERSION: u8 = 5;

    #[inline]
    pub const fn version(self) -> u8 {
        match self {
            Self::Standard => Self::STANDARD_VERSION,
            Self::Stable => Self::STABLE_VERSION,
        }
    }

    #[inline]
    pub const fn try_from_version(version: u8) -> Result<Self, UnsupportedVersionErr> {
        match version {
            Self::STANDARD_VERSION => Ok(Self::Standard),
            Self::STABLE_VERSION => Ok(Self::Stable),
            actual => Err(UnsupportedVersionErr { actual }),
        }
    }
}

impl TryFrom<u8> for PoolVariant {
    type Error = UnsupportedVersionErr;

    #[inline]
    fn try_from(version: u8) -> Result<Self, Self::Error> {
        Self::try_from_version(version)
    }
}

impl From<PoolVariant> for u8 {
    #[inline]
    fn from(variant: PoolVariant) -> Self {
        variant.version()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedVersionErr {
    pub actual: u8,
}

impl Display for UnsupportedVersionErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { actual } = self;
        f.write_fmt(format_args!(
            "pool version {actual} unsupported, expected {} or {}",
            PoolVariant::STANDARD_VERSION,
            PoolVariant::STABLE_VERSION,
        ))
    }
}

impl Error for UnsupportedVersionErr {}
