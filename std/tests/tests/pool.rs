use ammliq_std::{
    ammliq_amm_core::keys::WSOL_MINT_ID_STR,
    pool::PoolInfo,
    typedefs::{base_quote::BaseQuote, pool_variant::PoolVariant},
};
use ammliq_test_utils::*;
use serde_json::{json, Value};

use crate::common::*;

#[test]
fn json_field_names() {
    let v = serde_json::to_value(standard_pool()).unwrap();
    assert_eq!(v["version"], json!(4));
    assert_eq!(v["baseMint"], json!(WSOL_MINT_ID_STR));
    assert_eq!(v["baseReserve"], json!("0.001"));
    assert!(v.get("marketEventQueue").is_some());

    let stable = serde_json::to_value(stable_pool()).unwrap();
    assert_eq!(stable["version"], json!(5));
    assert!(stable.get("withdrawQueue").is_none());
}

#[test]
fn deserializes_without_standard_only_keys() {
    let mut v = serde_json::to_value(stable_pool()).unwrap();
    if let Value::Object(m) = &mut v {
        m.remove("lpVault");
    }
    let pool: PoolInfo = serde_json::from_value(v).unwrap();
    assert_eq!(pool, stable_pool());
    assert_eq!(pool.amm_keys().lp_vault, None);
}

#[test]
fn unknown_version_never_deserializes() {
    for version in [0, 3, 6, 255] {
        let mut v = serde_json::to_value(standard_pool()).unwrap();
        v["version"] = json!(version);
        let err = serde_json::from_value::<PoolInfo>(v).unwrap_err();
        assert!(err.to_string().contains("unsupported"), "{err}");
    }
}

#[test]
fn keys_and_reserves() {
    let pool = standard_pool();
    assert_eq!(pool.variant(), PoolVariant::Standard);
    assert_eq!(
        pool.raw_reserves(),
        Ok(BaseQuote {
            base: 1_000_000,
            quote: 2_000_000
        })
    );
    assert_eq!(pool.raw_lp_supply(), Ok(100_000_000_000));

    let amm = pool.amm_keys();
    assert_eq!(amm.program_id, FIXTURE_STANDARD_PROGRAM);
    assert_eq!(amm.withdraw_queue, Some(FIXTURE_WITHDRAW_QUEUE));
    let market = pool.market_keys();
    assert_eq!(market.program_id, FIXTURE_MARKET_PROGRAM);
    assert_eq!(market.authority, FIXTURE_MARKET_AUTHORITY);
    assert_eq!(pool.lp_token().mint, FIXTURE_LP_MINT);
}
