use ammliq_std::{
    ammliq_amm_core::keys::{NATIVE_MINT_ID, STABLE_ID},
    config::LiquidityConfig,
    liquidity::Liquidity,
    pool::PoolInfo,
    typedefs::{
        pool_variant::PoolVariant,
        token::{Token, TokenAmount},
    },
};
use ammliq_test_utils::*;
use bs58_fixed_wasm::Bs58Array;

use crate::common::MockResolver;

pub const USER_BASE: [u8; 32] = fixture_pk(31);
pub const USER_QUOTE: [u8; 32] = fixture_pk(32);
pub const USER_LP: [u8; 32] = fixture_pk(33);

pub const BASE_DECIMALS: u8 = 9;
pub const QUOTE_DECIMALS: u8 = 6;

pub const BASE: Token = Token {
    mint: FIXTURE_BASE_MINT,
    decimals: BASE_DECIMALS,
};

pub const QUOTE: Token = Token {
    mint: FIXTURE_QUOTE_MINT,
    decimals: QUOTE_DECIMALS,
};

/// The pool's WSOL side as passed by callers holding unwrapped SOL
pub const NATIVE: Token = Token {
    mint: NATIVE_MINT_ID,
    decimals: BASE_DECIMALS,
};

pub const fn amt(token: Token, amt: u64) -> TokenAmount {
    TokenAmount::new(token, amt)
}

/// Raw reserves base=1,000,000 quote=2,000,000, lp supply 100 * 10^9
pub fn standard_pool() -> PoolInfo {
    PoolInfo {
        id: Bs58Array(FIXTURE_AMM),
        program_id: Bs58Array(FIXTURE_STANDARD_PROGRAM),
        version: PoolVariant::Standard,
        base_mint: Bs58Array(FIXTURE_BASE_MINT),
        base_decimals: BASE_DECIMALS,
        quote_mint: Bs58Array(FIXTURE_QUOTE_MINT),
        quote_decimals: QUOTE_DECIMALS,
        lp_mint: Bs58Array(FIXTURE_LP_MINT),
        lp_decimals: 9,
        base_reserve: "0.001".to_owned(),
        quote_reserve: "2".to_owned(),
        lp_supply: "100".to_owned(),
        authority: Bs58Array(FIXTURE_AMM_AUTHORITY),
        open_orders: Bs58Array(FIXTURE_AMM_OPEN_ORDERS),
        target_orders: Bs58Array(FIXTURE_AMM_TARGET_ORDERS),
        base_vault: Bs58Array(FIXTURE_BASE_VAULT),
        quote_vault: Bs58Array(FIXTURE_QUOTE_VAULT),
        withdraw_queue: Some(Bs58Array(FIXTURE_WITHDRAW_QUEUE)),
        lp_vault: Some(Bs58Array(FIXTURE_LP_VAULT)),
        market_program_id: Bs58Array(FIXTURE_MARKET_PROGRAM),
        market_id: Bs58Array(FIXTURE_MARKET),
        market_bids: Bs58Array(FIXTURE_MARKET_BIDS),
        market_asks: Bs58Array(FIXTURE_MARKET_ASKS),
        market_event_queue: Bs58Array(FIXTURE_MARKET_EVENT_QUEUE),
        market_base_vault: Bs58Array(FIXTURE_MARKET_BASE_VAULT),
        market_quote_vault: Bs58Array(FIXTURE_MARKET_QUOTE_VAULT),
        market_authority: Bs58Array(FIXTURE_MARKET_AUTHORITY),
    }
}

pub fn stable_pool() -> PoolInfo {
    PoolInfo {
        program_id: Bs58Array(STABLE_ID),
        version: PoolVariant::Stable,
        withdraw_queue: None,
        lp_vault: None,
        ..standard_pool()
    }
}

/// Resolver where every user account already exists
pub fn existing_accs_resolver() -> MockResolver {
    MockResolver::default()
        .with_existing(FIXTURE_BASE_MINT, USER_BASE)
        .with_existing(FIXTURE_QUOTE_MINT, USER_QUOTE)
        .with_existing(FIXTURE_LP_MINT, USER_LP)
}

pub fn liquidity(resolver: MockResolver) -> Liquidity<MockResolver> {
    Liquidity::new(LiquidityConfig::default(), resolver)
}
