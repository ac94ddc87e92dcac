//! Accounts a liquidity instruction references, as sourced from pool metadata
//! and the caller's wallet

/// Accounts owned by the AMM program for a single pool
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmmKeys {
    pub program_id: [u8; 32],
    pub id: [u8; 32],
    pub authority: [u8; 32],
    pub open_orders: [u8; 32],
    pub target_orders: [u8; 32],
    pub lp_mint: [u8; 32],
    pub base_vault: [u8; 32],
    pub quote_vault: [u8; 32],

    /// Standard pools only
    pub withdraw_queue: Option<[u8; 32]>,

    /// Standard pools only
    pub lp_vault: Option<[u8; 32]>,
}

/// The order-book market the pool places its orders on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarketKeys {
    pub program_id: [u8; 32],
    pub id: [u8; 32],
    pub bids: [u8; 32],
    pub asks: [u8; 32],
    pub event_queue: [u8; 32],
    pub base_vault: [u8; 32],
    pub quote_vault: [u8; 32],
    pub authority: [u8; 32],
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserKeys {
    pub base_token_acc: [u8; 32],
    pub quote_token_acc: [u8; 32],
    pub lp_token_acc: [u8; 32],
    pub owner: [u8; 32],
}
