mod internal_utils;

pub mod liquidity;
