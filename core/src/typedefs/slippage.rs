use core::{error::Error, fmt::Display};

use sanctum_u64_ratio::{Floor, Ratio};

/// Max adverse ratio drift accepted between quoting and execution,
/// as the exact fraction `n / d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slippage {
    n: u64,
    d: u64,
}

impl Slippage {
    pub const ZERO: Self = Self { n: 0, d: 1 };

    /// 1%
    pub const ONE_PERCENT: Self = Self { n: 1, d: 100 };

    #[inline]
    pub const fn new(n: u64, d: u64) -> Result<Self, ZeroSlippageDenomErr> {
        if d == 0 {
            Err(ZeroSlippageDenomErr { n })
        } else {
            Ok(Self { n, d })
        }
    }

    #[inline]
    pub const fn n(&self) -> u64 {
        self.n
    }

    #[inline]
    pub const fn d(&self) -> u64 {
        self.d
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.n == 0
    }

    /// `amt * (1 + slippage)`, truncated.
    ///
    /// Computed as `amt + floor(amt * n / d)`, which equals
    /// `floor(amt * (d + n) / d)` for integer `amt` without summing `d + n`.
    ///
    /// `None` on overflow
    #[inline]
    pub const fn apply_upper(&self, amt: u64) -> Option<u64> {
        if self.is_zero() {
            return Some(amt);
        }
        match Floor(Ratio {
            n: self.n,
            d: self.d,
        })
        .apply(amt)
        {
            None => None,
            Some(extra) => amt.checked_add(extra),
        }
    }
}

impl Default for Slippage {
    #[inline]
    fn default() -> Self {
        Self::ONE_PERCENT
    }
}

impl Display for Slippage {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { n, d } = self;
        f.write_fmt(format_args!("{n}/{d}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSlippageDenomErr {
    pub n: u64,
}

impl Display for ZeroSlippageDenomErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { n } = self;
        f.write_fmt(format_args!("slippage {n}/0 has zero denominator"))
    }
}

impl Error for ZeroSlippageDenomErr {}
