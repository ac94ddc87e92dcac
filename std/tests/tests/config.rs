use ammliq_std::{
    ammliq_amm_core::keys::{MODEL_DATA_ID, STABLE_ID, TOKEN_PROGRAM_ID},
    config::LiquidityConfig,
    typedefs::{pool_variant::PoolVariant, slippage::Slippage},
};
use serde_json::json;

#[test]
fn empty_is_mainnet_default() {
    let cfg: LiquidityConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, LiquidityConfig::default());
    assert_eq!(cfg.token_program.0, TOKEN_PROGRAM_ID);
    assert_eq!(cfg.model_data.0, MODEL_DATA_ID);
    assert_eq!(cfg.default_slippage, Slippage::ONE_PERCENT);
}

#[test]
fn partial_override() {
    let cfg: LiquidityConfig = serde_json::from_value(json!({
        "defaultSlippage": { "numerator": 5, "denominator": 1000 }
    }))
    .unwrap();
    assert_eq!(cfg.default_slippage, Slippage::new(5, 1000).unwrap());
    assert_eq!(cfg.token_program.0, TOKEN_PROGRAM_ID);
}

#[test]
fn zero_denominator_rejected() {
    let err = serde_json::from_value::<LiquidityConfig>(json!({
        "defaultSlippage": { "numerator": 1, "denominator": 0 }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("zero denominator"), "{err}");
}

#[test]
fn serializes_camel_case() {
    let v = serde_json::to_value(LiquidityConfig::default()).unwrap();
    assert_eq!(
        v["defaultSlippage"],
        json!({ "numerator": 1, "denominator": 100 })
    );
    assert!(v.get("tokenProgram").is_some());
    assert!(v.get("modelData").is_some());
    assert!(v.get("standardProgram").is_some());
}

#[test]
fn program_ids_per_version() {
    let cfg = LiquidityConfig::default();
    assert_eq!(cfg.program_id(PoolVariant::Standard), &ammliq_std::ammliq_amm_core::ID);
    assert_eq!(cfg.program_id(PoolVariant::Stable), &STABLE_ID);

    let devnet: LiquidityConfig = serde_json::from_value(json!({
        "standardProgram": "11111111111111111111111111111111"
    }))
    .unwrap();
    assert_eq!(devnet.program_id(PoolVariant::Standard), &[0; 32]);
    assert_eq!(devnet.program_id(PoolVariant::Stable), &STABLE_ID);
}
