use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{instruction::Instruction, token_accounts::ResolvedTokenAcc};

/// Tag attached to every instruction handed to transaction assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionType {
    TokenAccSetup,
    AmmV4AddLiquidity,
    AmmV5AddLiquidity,
    AmmV4RemoveLiquidity,
    AmmV5RemoveLiquidity,
    TokenAccCleanup,
}

impl InstructionType {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TokenAccSetup => "TokenAccSetup",
            Self::AmmV4AddLiquidity => "AmmV4AddLiquidity",
            Self::AmmV5AddLiquidity => "AmmV5AddLiquidity",
            Self::AmmV4RemoveLiquidity => "AmmV4RemoveLiquidity",
            Self::AmmV5RemoveLiquidity => "AmmV5RemoveLiquidity",
            Self::TokenAccCleanup => "TokenAccCleanup",
        }
    }
}

impl Display for InstructionType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instructions of a liquidity operation in execution order.
///
/// `instruction_types[i]` tags `instructions[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityTx {
    pub instructions: Vec<Instruction>,
    pub instruction_types: Vec<InstructionType>,
}

/// Collects setup, liquidity and cleanup instructions,
/// emitted in that order by [`Self::build`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxBuilder {
    setup: Vec<Instruction>,
    main: Vec<(Instruction, InstructionType)>,
    cleanup: Vec<Instruction>,
}

impl TxBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the account's setup and cleanup instructions,
    /// returning its address
    pub fn add_token_acc(
        &mut self,
        ResolvedTokenAcc {
            address,
            setup,
            cleanup,
        }: ResolvedTokenAcc,
    ) -> [u8; 32] {
        self.setup.extend(setup);
        self.cleanup.extend(cleanup);
        address
    }

    pub fn add_ix(&mut self, ix: Instruction, ty: InstructionType) -> &mut Self {
        self.main.push((ix, ty));
        self
    }

    pub fn build(self) -> LiquidityTx {
        let Self {
            setup,
            main,
            cleanup,
        } = self;
        let (instructions, instruction_types) = setup
            .into_iter()
            .map(|ix| (ix, InstructionType::TokenAccSetup))
            .chain(main)
            .chain(
                cleanup
                    .into_iter()
                    .map(|ix| (ix, InstructionType::TokenAccCleanup)),
            )
            .unzip();
        LiquidityTx {
            instructions,
            instruction_types,
        }
    }
}
