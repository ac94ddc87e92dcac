pub mod amount_side;
pub mod base_quote;
pub mod keys;
pub mod mint;
pub mod pool_variant;
pub mod slippage;
pub mod token;
pub mod ui_amount;
