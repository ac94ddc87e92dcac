pub mod pair;
pub mod withdraw;
