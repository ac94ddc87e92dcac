use ammliq_core::instructions::liquidity::{
    add::{AddLiquidityIxAccFlags, AddLiquidityIxArgs},
    remove::{RemoveLiquidityIxAccFlags, RemoveLiquidityIxArgs},
};
use bs58_fixed_wasm::Bs58Array;
use serde::{Deserialize, Serialize};

use crate::interface::B58PK;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
    pub accounts: Vec<AccountMeta>,
    pub program_address: B58PK,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub address: B58PK,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    #[inline]
    pub const fn new(address: [u8; 32], role: Role) -> Self {
        Self {
            address: Bs58Array(address),
            is_signer: role.is_signer(),
            is_writable: role.is_writable(),
        }
    }

    #[inline]
    pub const fn role(&self) -> Role {
        Role::from_signer_writable(self.is_signer, self.is_writable)
    }
}

/// Represents the role of an account in a transaction:
/// - Readonly: 0
/// - Writable: 1
/// - ReadonlySigner: 2
/// - WritableSigner: 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Readonly,
    Writable,
    ReadonlySigner,
    WritableSigner,
}

impl Role {
    #[inline]
    pub const fn from_signer_writable(signer: bool, writable: bool) -> Self {
        match (signer, writable) {
            (true, true) => Self::WritableSigner,
            (true, false) => Self::ReadonlySigner,
            (false, true) => Self::Writable,
            (false, false) => Self::Readonly,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Readonly => 0,
            Self::Writable => 1,
            Self::ReadonlySigner => 2,
            Self::WritableSigner => 3,
        }
    }

    #[inline]
    pub const fn is_signer(self) -> bool {
        matches!(self, Self::ReadonlySigner | Self::WritableSigner)
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Writable | Self::WritableSigner)
    }
}

/// All 3 slices must have the same length
pub(crate) fn keys_signer_writable_to_metas(
    keys: &[[u8; 32]],
    signer: &[bool],
    writable: &[bool],
) -> Vec<AccountMeta> {
    keys.iter()
        .zip(signer)
        .zip(writable)
        .map(|((key, signer), writable)| {
            AccountMeta::new(*key, Role::from_signer_writable(*signer, *writable))
        })
        .collect()
}

pub fn add_liquidity_ix(args: &AddLiquidityIxArgs) -> Instruction {
    let signer: AddLiquidityIxAccFlags = args.accs.to_is_signer();
    let writable: AddLiquidityIxAccFlags = args.accs.to_is_writer();
    Instruction {
        data: args.to_ix_data().as_buf().to_vec(),
        accounts: keys_signer_writable_to_metas(
            args.accs.as_ref(),
            signer.as_ref(),
            writable.as_ref(),
        ),
        program_address: Bs58Array(args.program_id),
    }
}

pub fn remove_liquidity_ix(args: &RemoveLiquidityIxArgs) -> Instruction {
    let signer: RemoveLiquidityIxAccFlags = args.accs.to_is_signer();
    let writable: RemoveLiquidityIxAccFlags = args.accs.to_is_writer();
    Instruction {
        data: args.to_ix_data().as_buf().to_vec(),
        accounts: keys_signer_writable_to_metas(
            args.accs.as_ref(),
            signer.as_ref(),
            writable.as_ref(),
        ),
        program_address: Bs58Array(args.program_id),
    }
}
