//! Serde representations of pubkeys and core types

use ammliq_core::typedefs::{pool_variant::PoolVariant, slippage::Slippage};
use bs58_fixed::Bs58String;
use bs58_fixed_wasm::Bs58Array;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub type B58PK = Bs58Array<32, 44>;

pub(crate) type Bs58PkString = Bs58String<44>;

#[inline]
pub(crate) fn pk_str(pk: &[u8; 32]) -> Bs58PkString {
    Bs58PkString::encode(pk)
}

/// `PoolVariant` as its on-chain program version number.
/// Unknown versions fail deserialization.
pub(crate) mod pool_variant_as_version {
    use super::*;

    pub fn serialize<S: Serializer>(variant: &PoolVariant, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(variant.version())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<PoolVariant, D::Error> {
        let version = u8::deserialize(d)?;
        PoolVariant::try_from_version(version).map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct SlippageRepr {
    numerator: u64,
    denominator: u64,
}

/// `Slippage` as `{ "numerator": n, "denominator": d }`
pub(crate) mod slippage_as_fraction {
    use super::*;

    pub fn serialize<S: Serializer>(slippage: &Slippage, s: S) -> Result<S::Ok, S::Error> {
        SlippageRepr {
            numerator: slippage.n(),
            denominator: slippage.d(),
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Slippage, D::Error> {
        let SlippageRepr {
            numerator,
            denominator,
        } = SlippageRepr::deserialize(d)?;
        Slippage::new(numerator, denominator).map_err(de::Error::custom)
    }
}
