use generic_array_struct::generic_array_struct;

use crate::{
    err::IxDataErr,
    instructions::internal_utils::{caba, csba, exact_len, strip_discm},
};

use super::FixedSide;

// Accounts

/// Standard (v4) pools
#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct AddLiqStandardIxAccs<T> {
    pub token_program: T,
    pub amm: T,
    pub amm_authority: T,
    pub amm_open_orders: T,
    pub amm_target_orders: T,
    pub lp_mint: T,
    pub base_vault: T,
    pub quote_vault: T,
    pub market: T,
    pub user_base: T,
    pub user_quote: T,
    pub user_lp: T,
    pub owner: T,
    pub market_event_queue: T,
}

impl<T: Copy> AddLiqStandardIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; ADD_LIQ_STANDARD_IX_ACCS_LEN])
    }
}

impl<T> AsRef<[T]> for AddLiqStandardIxAccs<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

pub type AddLiqStandardIxKeys<'a> = AddLiqStandardIxAccs<&'a [u8; 32]>;

pub type AddLiqStandardIxKeysOwned = AddLiqStandardIxAccs<[u8; 32]>;

pub type AddLiqStandardIxAccFlags = AddLiqStandardIxAccs<bool>;

pub const ADD_LIQ_STANDARD_IX_IS_WRITER: AddLiqStandardIxAccFlags =
    AddLiqStandardIxAccFlags::memset(false)
        .const_with_amm(true)
        .const_with_amm_target_orders(true)
        .const_with_lp_mint(true)
        .const_with_base_vault(true)
        .const_with_quote_vault(true)
        .const_with_user_base(true)
        .const_with_user_quote(true)
        .const_with_user_lp(true);

pub const ADD_LIQ_STANDARD_IX_IS_SIGNER: AddLiqStandardIxAccFlags =
    AddLiqStandardIxAccFlags::memset(false).const_with_owner(true);

/// Stable (v5) pools. Same as [`AddLiqStandardIxAccs`] with
/// `model_data` between `quote_vault` and `market`
#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct AddLiqStableIxAccs<T> {
    pub token_program: T,
    pub amm: T,
    pub amm_authority: T,
    pub amm_open_orders: T,
    pub amm_target_orders: T,
    pub lp_mint: T,
    pub base_vault: T,
    pub quote_vault: T,
    pub model_data: T,
    pub market: T,
    pub user_base: T,
    pub user_quote: T,
    pub user_lp: T,
    pub owner: T,
    pub market_event_queue: T,
}

impl<T: Copy> AddLiqStableIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; ADD_LIQ_STABLE_IX_ACCS_LEN])
    }
}

impl<T> AsRef<[T]> for AddLiqStableIxAccs<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

pub type AddLiqStableIxKeys<'a> = AddLiqStableIxAccs<&'a [u8; 32]>;

pub type AddLiqStableIxKeysOwned = AddLiqStableIxAccs<[u8; 32]>;

pub type AddLiqStableIxAccFlags = AddLiqStableIxAccs<bool>;

pub const ADD_LIQ_STABLE_IX_IS_WRITER: AddLiqStableIxAccFlags =
    AddLiqStableIxAccFlags::memset(false)
        .const_with_amm(true)
        .const_with_amm_target_orders(true)
        .const_with_lp_mint(true)
        .const_with_base_vault(true)
        .const_with_quote_vault(true)
        .const_with_user_base(true)
        .const_with_user_quote(true)
        .const_with_user_lp(true);

pub const ADD_LIQ_STABLE_IX_IS_SIGNER: AddLiqStableIxAccFlags =
    AddLiqStableIxAccFlags::memset(false).const_with_owner(true);

// Data

pub const ADD_LIQUIDITY_IX_DISCM: u8 = 3;

pub const ADD_LIQUIDITY_IX_DATA_LEN: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityIxArgs {
    /// Max base tokens to deposit, exact if `fixed_side == Base`
    pub base_amount_in: u64,

    /// Max quote tokens to deposit, exact if `fixed_side == Quote`
    pub quote_amount_in: u64,

    pub fixed_side: FixedSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct AddLiquidityIxData([u8; ADD_LIQUIDITY_IX_DATA_LEN]);

impl AddLiquidityIxData {
    #[inline]
    pub const fn new(
        AddLiquidityIxArgs {
            base_amount_in,
            quote_amount_in,
            fixed_side,
        }: AddLiquidityIxArgs,
    ) -> Self {
        const A: usize = ADD_LIQUIDITY_IX_DATA_LEN;

        let mut d = [0u8; A];

        d = caba::<A, 0, 1>(d, &[ADD_LIQUIDITY_IX_DISCM]);
        d = caba::<A, 1, 8>(d, &base_amount_in.to_le_bytes());
        d = caba::<A, 9, 8>(d, &quote_amount_in.to_le_bytes());
        d = caba::<A, 17, 8>(d, &fixed_side.to_u64().to_le_bytes());

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; ADD_LIQUIDITY_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse(
        data: &[u8; ADD_LIQUIDITY_IX_DATA_LEN],
    ) -> Result<AddLiquidityIxArgs, IxDataErr> {
        let rest = match strip_discm::<ADD_LIQUIDITY_IX_DATA_LEN, 24>(data, ADD_LIQUIDITY_IX_DISCM)
        {
            Ok(r) => r,
            Err(e) => return Err(e),
        };
        let (base_amount_in, rest) = csba::<24, 8, 16>(rest);
        let (quote_amount_in, rest) = csba::<16, 8, 8>(rest);
        let (fixed_side, _) = csba::<8, 8, 0>(rest);

        let fixed_side = match FixedSide::try_from_u64(u64::from_le_bytes(*fixed_side)) {
            Ok(s) => s,
            Err(e) => return Err(IxDataErr::UnknownFixedSide(e)),
        };

        Ok(AddLiquidityIxArgs {
            base_amount_in: u64::from_le_bytes(*base_amount_in),
            quote_amount_in: u64::from_le_bytes(*quote_amount_in),
            fixed_side,
        })
    }

    #[inline]
    pub fn parse_slice(data: &[u8]) -> Result<AddLiquidityIxArgs, IxDataErr> {
        Self::parse(exact_len(data)?)
    }
}
