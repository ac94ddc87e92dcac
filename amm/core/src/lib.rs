#![cfg_attr(not(test), no_std)]

pub mod err;
pub mod instructions;
pub mod keys;

keys::id_str!(ID_STR, ID, "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");
