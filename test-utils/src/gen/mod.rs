mod common;
mod reserves;

pub use common::*;
pub use reserves::*;
