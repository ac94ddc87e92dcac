#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub mint: [u8; 32],
    pub decimals: u8,
}

/// Raw amount in the mint's smallest unit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    pub token: Token,
    pub amt: u64,
}

impl TokenAmount {
    #[inline]
    pub const fn new(token: Token, amt: u64) -> Self {
        Self { token, amt }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amt == 0
    }
}
