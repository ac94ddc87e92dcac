//! Deterministic fixture keys for a single pool

use ammliq_amm_core::keys::{MODEL_DATA_ID, OPENBOOK_ID, STABLE_ID, TOKEN_PROGRAM_ID, WSOL_MINT_ID};

pub const fn fixture_pk(b: u8) -> [u8; 32] {
    [b; 32]
}

pub const FIXTURE_TOKEN_PROGRAM: [u8; 32] = TOKEN_PROGRAM_ID;
pub const FIXTURE_MODEL_DATA: [u8; 32] = MODEL_DATA_ID;
pub const FIXTURE_STANDARD_PROGRAM: [u8; 32] = ammliq_amm_core::ID;
pub const FIXTURE_STABLE_PROGRAM: [u8; 32] = STABLE_ID;
pub const FIXTURE_MARKET_PROGRAM: [u8; 32] = OPENBOOK_ID;

pub const FIXTURE_BASE_MINT: [u8; 32] = WSOL_MINT_ID;
pub const FIXTURE_QUOTE_MINT: [u8; 32] = fixture_pk(2);

pub const FIXTURE_AMM: [u8; 32] = fixture_pk(10);
pub const FIXTURE_AMM_AUTHORITY: [u8; 32] = fixture_pk(11);
pub const FIXTURE_AMM_OPEN_ORDERS: [u8; 32] = fixture_pk(12);
pub const FIXTURE_AMM_TARGET_ORDERS: [u8; 32] = fixture_pk(13);
pub const FIXTURE_LP_MINT: [u8; 32] = fixture_pk(14);
pub const FIXTURE_BASE_VAULT: [u8; 32] = fixture_pk(15);
pub const FIXTURE_QUOTE_VAULT: [u8; 32] = fixture_pk(16);
pub const FIXTURE_WITHDRAW_QUEUE: [u8; 32] = fixture_pk(17);
pub const FIXTURE_LP_VAULT: [u8; 32] = fixture_pk(18);

pub const FIXTURE_MARKET: [u8; 32] = fixture_pk(20);
pub const FIXTURE_MARKET_BIDS: [u8; 32] = fixture_pk(21);
pub const FIXTURE_MARKET_ASKS: [u8; 32] = fixture_pk(22);
pub const FIXTURE_MARKET_EVENT_QUEUE: [u8; 32] = fixture_pk(23);
pub const FIXTURE_MARKET_BASE_VAULT: [u8; 32] = fixture_pk(24);
pub const FIXTURE_MARKET_QUOTE_VAULT: [u8; 32] = fixture_pk(25);
pub const FIXTURE_MARKET_AUTHORITY: [u8; 32] = fixture_pk(26);

pub const FIXTURE_OWNER: [u8; 32] = fixture_pk(30);
