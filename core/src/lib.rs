#![cfg_attr(not(test), no_std)]

// Re-exports
pub use ammliq_amm_core;
pub use sanctum_u64_ratio;

pub mod err;
pub mod instructions;
pub mod quote;
pub mod typedefs;
