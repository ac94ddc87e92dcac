use core::{error::Error, fmt::Display};

/// Rejections raised before any account list or ix data is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiqIxErr {
    ZeroAmount { field: &'static str },
    MissingAmmKey { field: &'static str },
}

impl Display for LiqIxErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroAmount { field } => f.write_fmt(format_args!("{field} must be > 0")),
            Self::MissingAmmKey { field } => {
                f.write_fmt(format_args!("pool keys missing {field}"))
            }
        }
    }
}

impl Error for LiqIxErr {}
