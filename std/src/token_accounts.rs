use std::fmt::Display;

use async_trait::async_trait;

use crate::instruction::Instruction;

/// Whether tokens flow into the pool from the account or out of the pool to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenAccDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenAccQuery {
    pub owner: [u8; 32],

    /// May be the native mint, in which case the resolver is expected
    /// to provide a wrapped account
    pub mint: [u8; 32],

    pub token_program: [u8; 32],
    pub direction: TokenAccDirection,

    /// Raw amount that will move through the account
    pub amount: u64,

    /// If false, only an existing account may be returned
    pub create_if_missing: bool,
}

/// A token account ready for use in a liquidity instruction.
///
/// `setup` runs before the liquidity instruction (account creation, wrapping)
/// and `cleanup` after it (closing temporary wrapped accounts).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTokenAcc {
    pub address: [u8; 32],
    pub setup: Vec<Instruction>,
    pub cleanup: Vec<Instruction>,
}

impl ResolvedTokenAcc {
    /// An account that already exists and needs no setup
    #[inline]
    pub const fn existing(address: [u8; 32]) -> Self {
        Self {
            address,
            setup: Vec::new(),
            cleanup: Vec::new(),
        }
    }
}

/// Finds, or prepares the creation of, the owner's token account for a mint
#[async_trait]
pub trait TokenAccountResolver: Send + Sync {
    type Error: Display + Send;

    /// `Ok(None)` if no usable account exists and none may be created
    async fn resolve(&self, query: TokenAccQuery)
        -> Result<Option<ResolvedTokenAcc>, Self::Error>;
}
