//! Decimal string to raw integer amount conversion.
//!
//! Amounts enter the system as decimal strings and are converted
//! exactly once, here, before any arithmetic.

use core::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAmountErr {
    Malformed,
    Negative,

    /// Exceeds `u64::MAX` in raw units
    Oob,
}

impl Display for UiAmountErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Malformed => "malformed decimal amount",
            Self::Negative => "negative amount",
            Self::Oob => "amount exceeds u64::MAX raw units",
        })
    }
}

impl Error for UiAmountErr {}

/// Parses a decimal string like `"1234.5678"` into raw units of a mint
/// with `decimals` decimals.
///
/// Fractional digits beyond `decimals` are truncated.
pub fn parse_raw_amount(s: &str, decimals: u8) -> Result<u64, UiAmountErr> {
    let s = s.trim();
    if s.starts_with('-') {
        return Err(UiAmountErr::Negative);
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    if int.is_empty() && frac.is_empty() {
        return Err(UiAmountErr::Malformed);
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(UiAmountErr::Malformed);
    }

    let frac = frac.as_bytes();
    let frac_digits = (0..usize::from(decimals)).map(|i| frac.get(i).copied().unwrap_or(b'0'));

    int.bytes()
        .chain(frac_digits)
        .try_fold(0u64, |raw, b| {
            raw.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })
        .ok_or(UiAmountErr::Oob)
}
