use ammliq_amm_core::instructions::liquidity::remove::{
    NewRemoveLiqStableIxAccsBuilder, NewRemoveLiqStandardIxAccsBuilder, RemoveLiqStableIxAccs,
    RemoveLiqStandardIxAccs, RemoveLiquidityIxArgs as RemoveLiquidityIxDataArgs,
    RemoveLiquidityIxData, REMOVE_LIQ_STABLE_IX_IS_SIGNER, REMOVE_LIQ_STABLE_IX_IS_WRITER,
    REMOVE_LIQ_STANDARD_IX_IS_SIGNER, REMOVE_LIQ_STANDARD_IX_IS_WRITER,
};

use crate::{
    err::LiqIxErr,
    typedefs::{keys::AmmKeys, pool_variant::PoolVariant},
};

use super::{IxKeys, VariantAccs};

pub type RemoveLiquidityIxAccs<T> =
    VariantAccs<RemoveLiqStandardIxAccs<T>, RemoveLiqStableIxAccs<T>>;

pub type RemoveLiquidityIxKeysOwned = RemoveLiquidityIxAccs<[u8; 32]>;

pub type RemoveLiquidityIxAccFlags = RemoveLiquidityIxAccs<bool>;

fn standard_only_keys(amm: &AmmKeys) -> Result<([u8; 32], [u8; 32]), LiqIxErr> {
    let withdraw_queue = amm.withdraw_queue.ok_or(LiqIxErr::MissingAmmKey {
        field: "withdraw_queue",
    })?;
    let lp_vault = amm
        .lp_vault
        .ok_or(LiqIxErr::MissingAmmKey { field: "lp_vault" })?;
    Ok((withdraw_queue, lp_vault))
}

impl RemoveLiquidityIxKeysOwned {
    /// Checks that `amm` has every key `variant` requires
    /// without building the account list
    #[inline]
    pub fn check_amm_keys(variant: PoolVariant, amm: &AmmKeys) -> Result<(), LiqIxErr> {
        match variant {
            PoolVariant::Standard => standard_only_keys(amm).map(|_| ()),
            PoolVariant::Stable => Ok(()),
        }
    }

    /// Standard pools must have `withdraw_queue` and `lp_vault` set
    pub fn try_new(
        variant: PoolVariant,
        IxKeys {
            amm,
            market,
            user,
            token_program,
            model_data,
        }: IxKeys<'_>,
    ) -> Result<Self, LiqIxErr> {
        Ok(match variant {
            PoolVariant::Standard => {
                let (withdraw_queue, lp_vault) = standard_only_keys(amm)?;
                Self::Standard(
                    NewRemoveLiqStandardIxAccsBuilder::start()
                        .with_token_program(*token_program)
                        .with_amm(amm.id)
                        .with_amm_authority(amm.authority)
                        .with_amm_open_orders(amm.open_orders)
                        .with_amm_target_orders(amm.target_orders)
                        .with_lp_mint(amm.lp_mint)
                        .with_base_vault(amm.base_vault)
                        .with_quote_vault(amm.quote_vault)
                        .with_withdraw_queue(withdraw_queue)
                        .with_lp_vault(lp_vault)
                        .with_market_program(market.program_id)
                        .with_market(market.id)
                        .with_market_base_vault(market.base_vault)
                        .with_market_quote_vault(market.quote_vault)
                        .with_market_authority(market.authority)
                        .with_user_lp(user.lp_token_acc)
                        .with_user_base(user.base_token_acc)
                        .with_user_quote(user.quote_token_acc)
                        .with_owner(user.owner)
                        .with_market_event_queue(market.event_queue)
                        .with_market_bids(market.bids)
                        .with_market_asks(market.asks)
                        .build(),
                )
            }
            PoolVariant::Stable => Self::Stable(
                NewRemoveLiqStableIxAccsBuilder::start()
                    .with_token_program(*token_program)
                    .with_amm(amm.id)
                    .with_amm_authority(amm.authority)
                    .with_amm_open_orders(amm.open_orders)
                    .with_amm_target_orders(amm.target_orders)
                    .with_lp_mint(amm.lp_mint)
                    .with_base_vault(amm.base_vault)
                    .with_quote_vault(amm.quote_vault)
                    .with_model_data(*model_data)
                    .with_market_program(market.program_id)
                    .with_market(market.id)
                    .with_market_base_vault(market.base_vault)
                    .with_market_quote_vault(market.quote_vault)
                    .with_market_authority(market.authority)
                    .with_user_lp(user.lp_token_acc)
                    .with_user_base(user.base_token_acc)
                    .with_user_quote(user.quote_token_acc)
                    .with_owner(user.owner)
                    .with_market_event_queue(market.event_queue)
                    .with_market_bids(market.bids)
                    .with_market_asks(market.asks)
                    .build(),
            ),
        })
    }

    #[inline]
    pub const fn to_is_writer(&self) -> RemoveLiquidityIxAccFlags {
        match self {
            Self::Standard(_) => VariantAccs::Standard(REMOVE_LIQ_STANDARD_IX_IS_WRITER),
            Self::Stable(_) => VariantAccs::Stable(REMOVE_LIQ_STABLE_IX_IS_WRITER),
        }
    }

    #[inline]
    pub const fn to_is_signer(&self) -> RemoveLiquidityIxAccFlags {
        match self {
            Self::Standard(_) => VariantAccs::Standard(REMOVE_LIQ_STANDARD_IX_IS_SIGNER),
            Self::Stable(_) => VariantAccs::Stable(REMOVE_LIQ_STABLE_IX_IS_SIGNER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityIxArgs {
    pub program_id: [u8; 32],
    pub data: RemoveLiquidityIxDataArgs,
    pub accs: RemoveLiquidityIxKeysOwned,
}

impl RemoveLiquidityIxArgs {
    /// `lp_amount` of LP tokens to burn
    pub fn try_new(
        variant: PoolVariant,
        keys: IxKeys<'_>,
        lp_amount: u64,
    ) -> Result<Self, LiqIxErr> {
        if lp_amount == 0 {
            return Err(LiqIxErr::ZeroAmount { field: "amount_in" });
        }
        Ok(Self {
            program_id: keys.amm.program_id,
            data: RemoveLiquidityIxDataArgs {
                amount_in: lp_amount,
            },
            accs: RemoveLiquidityIxKeysOwned::try_new(variant, keys)?,
        })
    }

    #[inline]
    pub const fn to_ix_data(&self) -> RemoveLiquidityIxData {
        RemoveLiquidityIxData::new(self.data)
    }
}
