use std::{collections::HashMap, sync::Mutex};

use ammliq_std::{
    instruction::Instruction,
    token_accounts::{ResolvedTokenAcc, TokenAccQuery, TokenAccountResolver},
};
use async_trait::async_trait;
use bs58_fixed_wasm::Bs58Array;

/// Program address of the placeholder setup and cleanup instructions
pub const MOCK_SETUP_PROGRAM: [u8; 32] = [0xAA; 32];

/// Resolves from a fixed map of `mint: existing account`.
///
/// Missing accounts are created at `[mint[0] ^ 0xFF; 32]` with a single
/// setup and cleanup instruction if the query allows creation
/// and `allow_create` is set.
#[derive(Debug, Default)]
pub struct MockResolver {
    pub existing: HashMap<[u8; 32], [u8; 32]>,
    pub allow_create: bool,
    pub fail_with: Option<String>,
    pub queries: Mutex<Vec<TokenAccQuery>>,
}

impl MockResolver {
    pub fn with_existing(mut self, mint: [u8; 32], acc: [u8; 32]) -> Self {
        self.existing.insert(mint, acc);
        self
    }

    pub fn with_allow_create(mut self) -> Self {
        self.allow_create = true;
        self
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_owned()),
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<TokenAccQuery> {
        self.queries.lock().unwrap().clone()
    }
}

pub fn created_acc(mint: &[u8; 32]) -> [u8; 32] {
    [mint[0] ^ 0xFF; 32]
}

pub fn mock_ix(tag: u8, addr: [u8; 32]) -> Instruction {
    Instruction {
        data: vec![tag],
        accounts: Vec::new(),
        program_address: Bs58Array(addr),
    }
}

#[async_trait]
impl TokenAccountResolver for MockResolver {
    type Error = String;

    async fn resolve(&self, query: TokenAccQuery) -> Result<Option<ResolvedTokenAcc>, String> {
        self.queries.lock().unwrap().push(query);
        if let Some(msg) = &self.fail_with {
            return Err(msg.clone());
        }
        if let Some(acc) = self.existing.get(&query.mint) {
            return Ok(Some(ResolvedTokenAcc::existing(*acc)));
        }
        if !(self.allow_create && query.create_if_missing) {
            return Ok(None);
        }
        let address = created_acc(&query.mint);
        Ok(Some(ResolvedTokenAcc {
            address,
            setup: vec![mock_ix(0, MOCK_SETUP_PROGRAM)],
            cleanup: vec![mock_ix(1, MOCK_SETUP_PROGRAM)],
        }))
    }
}
