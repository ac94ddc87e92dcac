use ammliq_core::typedefs::{
    base_quote::BaseQuote,
    keys::{AmmKeys, MarketKeys},
    pool_variant::PoolVariant,
    token::Token,
    ui_amount::parse_raw_amount,
};
use serde::{Deserialize, Serialize};

use crate::{
    err::LiqErr,
    interface::{pool_variant_as_version, B58PK},
};

/// Snapshot of a pool's metadata and reserves as served by the pool API.
///
/// Reserves and lp supply are decimal strings in UI units
/// and are converted to raw units by [`Self::raw_reserves`] and [`Self::raw_lp_supply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub id: B58PK,
    pub program_id: B58PK,

    #[serde(with = "pool_variant_as_version")]
    pub version: PoolVariant,

    pub base_mint: B58PK,
    pub base_decimals: u8,
    pub quote_mint: B58PK,
    pub quote_decimals: u8,
    pub lp_mint: B58PK,
    pub lp_decimals: u8,

    pub base_reserve: String,
    pub quote_reserve: String,
    pub lp_supply: String,

    pub authority: B58PK,
    pub open_orders: B58PK,
    pub target_orders: B58PK,
    pub base_vault: B58PK,
    pub quote_vault: B58PK,

    /// Standard pools only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdraw_queue: Option<B58PK>,

    /// Standard pools only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lp_vault: Option<B58PK>,

    pub market_program_id: B58PK,
    pub market_id: B58PK,
    pub market_bids: B58PK,
    pub market_asks: B58PK,
    pub market_event_queue: B58PK,
    pub market_base_vault: B58PK,
    pub market_quote_vault: B58PK,
    pub market_authority: B58PK,
}

impl PoolInfo {
    #[inline]
    pub const fn variant(&self) -> PoolVariant {
        self.version
    }

    #[inline]
    pub const fn pool_tokens(&self) -> BaseQuote<Token> {
        BaseQuote {
            base: Token {
                mint: self.base_mint.0,
                decimals: self.base_decimals,
            },
            quote: Token {
                mint: self.quote_mint.0,
                decimals: self.quote_decimals,
            },
        }
    }

    #[inline]
    pub const fn lp_token(&self) -> Token {
        Token {
            mint: self.lp_mint.0,
            decimals: self.lp_decimals,
        }
    }

    pub fn raw_reserves(&self) -> Result<BaseQuote<u64>, LiqErr> {
        Ok(BaseQuote {
            base: to_raw("baseReserve", &self.base_reserve, self.base_decimals)?,
            quote: to_raw("quoteReserve", &self.quote_reserve, self.quote_decimals)?,
        })
    }

    pub fn raw_lp_supply(&self) -> Result<u64, LiqErr> {
        to_raw("lpSupply", &self.lp_supply, self.lp_decimals)
    }

    #[inline]
    pub fn amm_keys(&self) -> AmmKeys {
        AmmKeys {
            program_id: self.program_id.0,
            id: self.id.0,
            authority: self.authority.0,
            open_orders: self.open_orders.0,
            target_orders: self.target_orders.0,
            lp_mint: self.lp_mint.0,
            base_vault: self.base_vault.0,
            quote_vault: self.quote_vault.0,
            withdraw_queue: self.withdraw_queue.map(|pk| pk.0),
            lp_vault: self.lp_vault.map(|pk| pk.0),
        }
    }

    #[inline]
    pub const fn market_keys(&self) -> MarketKeys {
        MarketKeys {
            program_id: self.market_program_id.0,
            id: self.market_id.0,
            bids: self.market_bids.0,
            asks: self.market_asks.0,
            event_queue: self.market_event_queue.0,
            base_vault: self.market_base_vault.0,
            quote_vault: self.market_quote_vault.0,
            authority: self.market_authority.0,
        }
    }
}

fn to_raw(field: &'static str, value: &str, decimals: u8) -> Result<u64, LiqErr> {
    parse_raw_amount(value, decimals).map_err(|err| LiqErr::InvalidAmount {
        field,
        value: value.to_owned(),
        err,
    })
}
