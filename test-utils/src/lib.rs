mod gen;
mod keys;

pub use gen::*;
pub use keys::*;
