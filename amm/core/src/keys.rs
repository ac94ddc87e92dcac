macro_rules! id_str {
    ($ID_STR:ident, $ID:ident, $pkstr:expr) => {
        pub const $ID_STR: &str = $pkstr;
        pub const $ID: [u8; 32] = const_crypto::bs58::decode_pubkey($ID_STR);
    };
}
pub(crate) use id_str;

// Programs

id_str!(
    STABLE_ID_STR,
    STABLE_ID,
    "5quBtoiQqxF9Jv6KYKctB59NT3gtJD2Y65kdnB1Uev3h"
);

id_str!(
    OPENBOOK_ID_STR,
    OPENBOOK_ID,
    "srmqPvymJeFKQ4zGQed1GFppgkRHL9kaELCbyksJtPX"
);

id_str!(
    TOKEN_PROGRAM_ID_STR,
    TOKEN_PROGRAM_ID,
    "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
);

// Accounts

// curve parameters shared by every stable pool
id_str!(
    MODEL_DATA_ID_STR,
    MODEL_DATA_ID,
    "CDSr3ssLcRB6XYPJwAfFt18MZvEZp4LjHcvzBVZ45duo"
);

// Mints

id_str!(
    WSOL_MINT_ID_STR,
    WSOL_MINT_ID,
    "So11111111111111111111111111111111111111112"
);

// off-chain placeholder for unwrapped SOL.
// Never valid inside a pool, pools hold WSOL_MINT_ID instead
id_str!(
    NATIVE_MINT_ID_STR,
    NATIVE_MINT_ID,
    "11111111111111111111111111111111"
);
