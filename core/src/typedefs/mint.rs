use ammliq_amm_core::keys::{NATIVE_MINT_ID, WSOL_MINT_ID};

#[inline]
pub fn is_native_mint(mint: &[u8; 32]) -> bool {
    *mint == NATIVE_MINT_ID
}

/// Pools only ever hold wrapped SOL, so the native placeholder
/// is mapped to the wrapped mint before any comparison against pool mints
#[inline]
pub fn normalize_mint(mint: &[u8; 32]) -> [u8; 32] {
    if is_native_mint(mint) {
        WSOL_MINT_ID
    } else {
        *mint
    }
}
