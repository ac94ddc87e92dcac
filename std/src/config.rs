use ammliq_core::{
    ammliq_amm_core::{
        keys::{MODEL_DATA_ID, STABLE_ID, TOKEN_PROGRAM_ID},
        ID,
    },
    typedefs::{pool_variant::PoolVariant, slippage::Slippage},
};
use bs58_fixed_wasm::Bs58Array;
use serde::{Deserialize, Serialize};

use crate::interface::{slippage_as_fraction, B58PK};

/// Every field falls back to its mainnet default when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiquidityConfig {
    /// Expected owner of standard (v4) pools
    pub standard_program: B58PK,

    /// Expected owner of stable (v5) pools
    pub stable_program: B58PK,

    pub token_program: B58PK,

    /// Curve parameters account referenced by stable pool instructions
    pub model_data: B58PK,

    /// Used by [`crate::liquidity::Liquidity::compute_pair_amount_default_slippage`]
    #[serde(with = "slippage_as_fraction")]
    pub default_slippage: Slippage,
}

impl LiquidityConfig {
    pub const MAINNET: Self = Self {
        standard_program: Bs58Array(ID),
        stable_program: Bs58Array(STABLE_ID),
        token_program: Bs58Array(TOKEN_PROGRAM_ID),
        model_data: Bs58Array(MODEL_DATA_ID),
        default_slippage: Slippage::ONE_PERCENT,
    };

    #[inline]
    pub const fn program_id(&self, variant: PoolVariant) -> &[u8; 32] {
        match variant {
            PoolVariant::Standard => &self.standard_program.0,
            PoolVariant::Stable => &self.stable_program.0,
        }
    }
}

impl Default for LiquidityConfig {
    #[inline]
    fn default() -> Self {
        Self::MAINNET
    }
}
