use core::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IxDataErr {
    WrongDiscm { expected: u8, actual: u8 },
    WrongLen { expected: usize, actual: usize },
    UnknownFixedSide(UnknownFixedSideErr),
}

impl Display for IxDataErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WrongDiscm { expected, actual } => f.write_fmt(format_args!(
                "expected ix discm {expected}, got {actual}"
            )),
            Self::WrongLen { expected, actual } => f.write_fmt(format_args!(
                "expected ix data len {expected}, got {actual}"
            )),
            Self::UnknownFixedSide(e) => e.fmt(f),
        }
    }
}

impl Error for IxDataErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownFixedSideErr {
    pub actual: u64,
}

impl Display for UnknownFixedSideErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { actual } = self;
        f.write_fmt(format_args!("fixed side {actual} is neither 0 (base) nor 1 (quote)"))
    }
}

impl Error for UnknownFixedSideErr {}
