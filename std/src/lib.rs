// Re-exports
pub use ammliq_core::*;

pub mod config;
pub mod err;
pub mod instruction;
pub mod interface;
pub mod liquidity;
pub mod pool;
pub mod token_accounts;
pub mod tx;
pub mod ui;
