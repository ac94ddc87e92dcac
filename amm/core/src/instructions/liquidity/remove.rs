use generic_array_struct::generic_array_struct;

use crate::{
    err::IxDataErr,
    instructions::internal_utils::{caba, csba, exact_len, strip_discm},
};

// Accounts
//
// Withdrawal may need to cancel and settle the pool's resting
// orders, so the market's book accounts are passed writable.

/// Standard (v4) pools
#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RemoveLiqStandardIxAccs<T> {
    pub token_program: T,
    pub amm: T,
    pub amm_authority: T,
    pub amm_open_orders: T,
    pub amm_target_orders: T,
    pub lp_mint: T,
    pub base_vault: T,
    pub quote_vault: T,
    pub withdraw_queue: T,
    pub lp_vault: T,
    pub market_program: T,
    pub market: T,
    pub market_base_vault: T,
    pub market_quote_vault: T,
    pub market_authority: T,
    pub user_lp: T,
    pub user_base: T,
    pub user_quote: T,
    pub owner: T,
    pub market_event_queue: T,
    pub market_bids: T,
    pub market_asks: T,
}

impl<T: Copy> RemoveLiqStandardIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; REMOVE_LIQ_STANDARD_IX_ACCS_LEN])
    }
}

impl<T> AsRef<[T]> for RemoveLiqStandardIxAccs<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

pub type RemoveLiqStandardIxKeys<'a> = RemoveLiqStandardIxAccs<&'a [u8; 32]>;

pub type RemoveLiqStandardIxKeysOwned = RemoveLiqStandardIxAccs<[u8; 32]>;

pub type RemoveLiqStandardIxAccFlags = RemoveLiqStandardIxAccs<bool>;

pub const REMOVE_LIQ_STANDARD_IX_IS_WRITER: RemoveLiqStandardIxAccFlags =
    RemoveLiqStandardIxAccFlags::memset(true)
        .const_with_token_program(false)
        .const_with_amm_authority(false)
        .const_with_market_program(false)
        .const_with_market_authority(false)
        .const_with_owner(false);

pub const REMOVE_LIQ_STANDARD_IX_IS_SIGNER: RemoveLiqStandardIxAccFlags =
    RemoveLiqStandardIxAccFlags::memset(false).const_with_owner(true);

/// Stable (v5) pools. Same as [`RemoveLiqStandardIxAccs`] with
/// `model_data` in place of `withdraw_queue, lp_vault`
#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RemoveLiqStableIxAccs<T> {
    pub token_program: T,
    pub amm: T,
    pub amm_authority: T,
    pub amm_open_orders: T,
    pub amm_target_orders: T,
    pub lp_mint: T,
    pub base_vault: T,
    pub quote_vault: T,
    pub model_data: T,
    pub market_program: T,
    pub market: T,
    pub market_base_vault: T,
    pub market_quote_vault: T,
    pub market_authority: T,
    pub user_lp: T,
    pub user_base: T,
    pub user_quote: T,
    pub owner: T,
    pub market_event_queue: T,
    pub market_bids: T,
    pub market_asks: T,
}

impl<T: Copy> RemoveLiqStableIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; REMOVE_LIQ_STABLE_IX_ACCS_LEN])
    }
}

impl<T> AsRef<[T]> for RemoveLiqStableIxAccs<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

pub type RemoveLiqStableIxKeys<'a> = RemoveLiqStableIxAccs<&'a [u8; 32]>;

pub type RemoveLiqStableIxKeysOwned = RemoveLiqStableIxAccs<[u8; 32]>;

pub type RemoveLiqStableIxAccFlags = RemoveLiqStableIxAccs<bool>;

pub const REMOVE_LIQ_STABLE_IX_IS_WRITER: RemoveLiqStableIxAccFlags =
    RemoveLiqStableIxAccFlags::memset(true)
        .const_with_token_program(false)
        .const_with_amm_authority(false)
        .const_with_model_data(false)
        .const_with_market_program(false)
        .const_with_market_authority(false)
        .const_with_owner(false);

pub const REMOVE_LIQ_STABLE_IX_IS_SIGNER: RemoveLiqStableIxAccFlags =
    RemoveLiqStableIxAccFlags::memset(false).const_with_owner(true);

// Data

pub const REMOVE_LIQUIDITY_IX_DISCM: u8 = 4;

pub const REMOVE_LIQUIDITY_IX_DATA_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityIxArgs {
    /// LP tokens to burn
    pub amount_in: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RemoveLiquidityIxData([u8; REMOVE_LIQUIDITY_IX_DATA_LEN]);

impl RemoveLiquidityIxData {
    #[inline]
    pub const fn new(RemoveLiquidityIxArgs { amount_in }: RemoveLiquidityIxArgs) -> Self {
        const A: usize = REMOVE_LIQUIDITY_IX_DATA_LEN;

        let mut d = [0u8; A];

        d = caba::<A, 0, 1>(d, &[REMOVE_LIQUIDITY_IX_DISCM]);
        d = caba::<A, 1, 8>(d, &amount_in.to_le_bytes());

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; REMOVE_LIQUIDITY_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse(
        data: &[u8; REMOVE_LIQUIDITY_IX_DATA_LEN],
    ) -> Result<RemoveLiquidityIxArgs, IxDataErr> {
        let rest = match strip_discm::<REMOVE_LIQUIDITY_IX_DATA_LEN, 8>(
            data,
            REMOVE_LIQUIDITY_IX_DISCM,
        ) {
            Ok(r) => r,
            Err(e) => return Err(e),
        };
        let (amount_in, _) = csba::<8, 8, 0>(rest);
        Ok(RemoveLiquidityIxArgs {
            amount_in: u64::from_le_bytes(*amount_in),
        })
    }

    #[inline]
    pub fn parse_slice(data: &[u8]) -> Result<RemoveLiquidityIxArgs, IxDataErr> {
        Self::parse(exact_len(data)?)
    }
}
