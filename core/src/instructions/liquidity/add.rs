use ammliq_amm_core::instructions::liquidity::add::{
    AddLiqStableIxAccs, AddLiqStandardIxAccs, AddLiquidityIxArgs as AddLiquidityIxDataArgs,
    AddLiquidityIxData, NewAddLiqStableIxAccsBuilder, NewAddLiqStandardIxAccsBuilder,
    ADD_LIQ_STABLE_IX_IS_SIGNER, ADD_LIQ_STABLE_IX_IS_WRITER, ADD_LIQ_STANDARD_IX_IS_SIGNER,
    ADD_LIQ_STANDARD_IX_IS_WRITER,
};

use crate::{
    err::LiqIxErr,
    typedefs::{
        base_quote::{BaseQuote, Side},
        pool_variant::PoolVariant,
    },
};

use super::{IxKeys, VariantAccs};

pub type AddLiquidityIxAccs<T> = VariantAccs<AddLiqStandardIxAccs<T>, AddLiqStableIxAccs<T>>;

pub type AddLiquidityIxKeysOwned = AddLiquidityIxAccs<[u8; 32]>;

pub type AddLiquidityIxAccFlags = AddLiquidityIxAccs<bool>;

impl AddLiquidityIxKeysOwned {
    pub fn new(
        variant: PoolVariant,
        IxKeys {
            amm,
            market,
            user,
            token_program,
            model_data,
        }: IxKeys<'_>,
    ) -> Self {
        match variant {
            PoolVariant::Standard => Self::Standard(
                NewAddLiqStandardIxAccsBuilder::start()
                    .with_token_program(*token_program)
                    .with_amm(amm.id)
                    .with_amm_authority(amm.authority)
                    .with_amm_open_orders(amm.open_orders)
                    .with_amm_target_orders(amm.target_orders)
                    .with_lp_mint(amm.lp_mint)
                    .with_base_vault(amm.base_vault)
                    .with_quote_vault(amm.quote_vault)
                    .with_market(market.id)
                    .with_user_base(user.base_token_acc)
                    .with_user_quote(user.quote_token_acc)
                    .with_user_lp(user.lp_token_acc)
                    .with_owner(user.owner)
                    .with_market_event_queue(market.event_queue)
                    .build(),
            ),
            PoolVariant::Stable => Self::Stable(
                NewAddLiqStableIxAccsBuilder::start()
                    .with_token_program(*token_program)
                    .with_amm(amm.id)
                    .with_amm_authority(amm.authority)
                    .with_amm_open_orders(amm.open_orders)
                    .with_amm_target_orders(amm.target_orders)
                    .with_lp_mint(amm.lp_mint)
                    .with_base_vault(amm.base_vault)
                    .with_quote_vault(amm.quote_vault)
                    .with_model_data(*model_data)
                    .with_market(market.id)
                    .with_user_base(user.base_token_acc)
                    .with_user_quote(user.quote_token_acc)
                    .with_user_lp(user.lp_token_acc)
                    .with_owner(user.owner)
                    .with_market_event_queue(market.event_queue)
                    .build(),
            ),
        }
    }

    #[inline]
    pub const fn to_is_writer(&self) -> AddLiquidityIxAccFlags {
        match self {
            Self::Standard(_) => VariantAccs::Standard(ADD_LIQ_STANDARD_IX_IS_WRITER),
            Self::Stable(_) => VariantAccs::Stable(ADD_LIQ_STABLE_IX_IS_WRITER),
        }
    }

    #[inline]
    pub const fn to_is_signer(&self) -> AddLiquidityIxAccFlags {
        match self {
            Self::Standard(_) => VariantAccs::Standard(ADD_LIQ_STANDARD_IX_IS_SIGNER),
            Self::Stable(_) => VariantAccs::Stable(ADD_LIQ_STABLE_IX_IS_SIGNER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityIxArgs {
    pub program_id: [u8; 32],
    pub data: AddLiquidityIxDataArgs,
    pub accs: AddLiquidityIxKeysOwned,
}

impl AddLiquidityIxArgs {
    /// `amounts` are the max amounts to deposit. The side at `fixed_side`
    /// is deposited exactly.
    pub fn try_new(
        variant: PoolVariant,
        keys: IxKeys<'_>,
        amounts: BaseQuote<u64>,
        fixed_side: Side,
    ) -> Result<Self, LiqIxErr> {
        if amounts.base == 0 {
            return Err(LiqIxErr::ZeroAmount {
                field: "base_amount_in",
            });
        }
        if amounts.quote == 0 {
            return Err(LiqIxErr::ZeroAmount {
                field: "quote_amount_in",
            });
        }
        Ok(Self {
            program_id: keys.amm.program_id,
            data: AddLiquidityIxDataArgs {
                base_amount_in: amounts.base,
                quote_amount_in: amounts.quote,
                fixed_side: fixed_side.into(),
            },
            accs: AddLiquidityIxKeysOwned::new(variant, keys),
        })
    }

    #[inline]
    pub const fn to_ix_data(&self) -> AddLiquidityIxData {
        AddLiquidityIxData::new(self.data)
    }
}
