use ammliq_std::{
    ammliq_amm_core::{
        instructions::liquidity::{
            add::{AddLiquidityIxArgs, AddLiquidityIxData},
            FixedSide,
        },
        keys::{MODEL_DATA_ID, TOKEN_PROGRAM_ID, WSOL_MINT_ID},
    },
    err::{LiqErr, LiqIxErr},
    instruction::{Instruction, Role},
    liquidity::AddLiquidityParams,
    pool::PoolInfo,
    quote::pair::PairAmountErr,
    token_accounts::TokenAccDirection,
    tx::{InstructionType, LiquidityTx},
    typedefs::{amount_side::AmountSide, pool_variant::PoolVariant},
};
use ammliq_test_utils::*;
use bs58_fixed_wasm::Bs58Array;

use crate::common::*;

fn params(
    pool: &PoolInfo,
    a: ammliq_std::typedefs::token::TokenAmount,
    b: ammliq_std::typedefs::token::TokenAmount,
    fixed_side: AmountSide,
) -> AddLiquidityParams<'_> {
    AddLiquidityParams {
        pool,
        owner: FIXTURE_OWNER,
        amount_in_a: a,
        amount_in_b: b,
        fixed_side,
    }
}

fn single_ix(tx: LiquidityTx, ty: InstructionType) -> Instruction {
    assert_eq!(tx.instruction_types, [ty]);
    let [ix] = <[Instruction; 1]>::try_from(tx.instructions).unwrap();
    ix
}

fn addresses(ix: &Instruction) -> Vec<[u8; 32]> {
    ix.accounts.iter().map(|a| a.address.0).collect()
}

#[tokio::test]
async fn standard_base_fixed() {
    let pool = standard_pool();
    let liq = liquidity(existing_accs_resolver());
    let tx = liq
        .add_liquidity(params(
            &pool,
            amt(BASE, 100),
            amt(QUOTE, 202),
            AmountSide::A,
        ))
        .await
        .unwrap();
    let ix = single_ix(tx, InstructionType::AmmV4AddLiquidity);

    assert_eq!(ix.program_address.0, FIXTURE_STANDARD_PROGRAM);
    assert_eq!(
        AddLiquidityIxData::parse_slice(&ix.data),
        Ok(AddLiquidityIxArgs {
            base_amount_in: 100,
            quote_amount_in: 202,
            fixed_side: FixedSide::Base,
        })
    );
    assert_eq!(
        addresses(&ix),
        [
            TOKEN_PROGRAM_ID,
            FIXTURE_AMM,
            FIXTURE_AMM_AUTHORITY,
            FIXTURE_AMM_OPEN_ORDERS,
            FIXTURE_AMM_TARGET_ORDERS,
            FIXTURE_LP_MINT,
            FIXTURE_BASE_VAULT,
            FIXTURE_QUOTE_VAULT,
            FIXTURE_MARKET,
            USER_BASE,
            USER_QUOTE,
            USER_LP,
            FIXTURE_OWNER,
            FIXTURE_MARKET_EVENT_QUEUE,
        ]
    );

    let roles: Vec<_> = ix.accounts.iter().map(|a| a.role()).collect();
    assert_eq!(roles[0], Role::Readonly);
    assert_eq!(roles[1], Role::Writable);
    assert_eq!(roles[3], Role::Readonly);
    assert_eq!(roles[8], Role::Readonly);
    assert_eq!(roles[12], Role::ReadonlySigner);
    assert_eq!(roles[13], Role::Readonly);
}

#[tokio::test]
async fn stable_inserts_model_data() {
    let pool = stable_pool();
    let liq = liquidity(existing_accs_resolver());
    let tx = liq
        .add_liquidity(params(
            &pool,
            amt(BASE, 100),
            amt(QUOTE, 202),
            AmountSide::B,
        ))
        .await
        .unwrap();
    let ix = single_ix(tx, InstructionType::AmmV5AddLiquidity);

    let addrs = addresses(&ix);
    assert_eq!(addrs.len(), 15);
    assert_eq!(addrs[7], FIXTURE_QUOTE_VAULT);
    assert_eq!(addrs[8], MODEL_DATA_ID);
    assert_eq!(addrs[9], FIXTURE_MARKET);
    assert_eq!(ix.accounts[8].role(), Role::Readonly);
    assert_eq!(
        AddLiquidityIxData::parse_slice(&ix.data).unwrap().fixed_side,
        FixedSide::Quote
    );
}

#[tokio::test]
async fn caller_order_mapped_to_pool_sides() {
    let pool = standard_pool();
    let liq = liquidity(existing_accs_resolver());
    // a is the quote side, native SOL normalizes to the WSOL base side
    let tx = liq
        .add_liquidity(params(
            &pool,
            amt(QUOTE, 202),
            amt(NATIVE, 100),
            AmountSide::B,
        ))
        .await;
    // no account for the native mint itself
    assert_eq!(tx, Err(LiqErr::MissingTokenAcc { mint: NATIVE.mint }));

    let liq = liquidity(existing_accs_resolver().with_existing(NATIVE.mint, USER_BASE));
    let tx = liq
        .add_liquidity(params(
            &pool,
            amt(QUOTE, 202),
            amt(NATIVE, 100),
            AmountSide::B,
        ))
        .await
        .unwrap();
    let ix = single_ix(tx, InstructionType::AmmV4AddLiquidity);
    assert_eq!(
        AddLiquidityIxData::parse_slice(&ix.data),
        Ok(AddLiquidityIxArgs {
            base_amount_in: 100,
            quote_amount_in: 202,
            fixed_side: FixedSide::Base,
        })
    );

    let queries = liq.resolver().queries();
    let mints: Vec<_> = queries.iter().map(|q| q.mint).collect();
    assert_eq!(mints, [NATIVE.mint, FIXTURE_QUOTE_MINT, FIXTURE_LP_MINT]);
    let amounts: Vec<_> = queries.iter().map(|q| q.amount).collect();
    assert_eq!(amounts, [100, 202, 0]);
    assert!(queries.iter().all(|q| q.create_if_missing));
    assert_eq!(
        queries.iter().map(|q| q.direction).collect::<Vec<_>>(),
        [
            TokenAccDirection::In,
            TokenAccDirection::In,
            TokenAccDirection::Out
        ]
    );
}

#[tokio::test]
async fn created_accounts_wrap_liquidity_ix() {
    let pool = standard_pool();
    let liq = liquidity(
        MockResolver::default()
            .with_existing(FIXTURE_QUOTE_MINT, USER_QUOTE)
            .with_allow_create(),
    );
    let tx = liq
        .add_liquidity(params(
            &pool,
            amt(BASE, 100),
            amt(QUOTE, 202),
            AmountSide::A,
        ))
        .await
        .unwrap();

    assert_eq!(
        tx.instruction_types,
        [
            InstructionType::TokenAccSetup,
            InstructionType::TokenAccSetup,
            InstructionType::AmmV4AddLiquidity,
            InstructionType::TokenAccCleanup,
            InstructionType::TokenAccCleanup,
        ]
    );
    let addrs = addresses(&tx.instructions[2]);
    assert_eq!(addrs[9], created_acc(&WSOL_MINT_ID));
    assert_eq!(addrs[10], USER_QUOTE);
    assert_eq!(addrs[11], created_acc(&FIXTURE_LP_MINT));
}

#[tokio::test]
async fn rejects_zero_before_resolving() {
    let pool = standard_pool();
    let liq = liquidity(existing_accs_resolver());
    for (a, b, field) in [(0, 1, "amount_in_a"), (1, 0, "amount_in_b")] {
        assert_eq!(
            liq.add_liquidity(params(&pool, amt(BASE, a), amt(QUOTE, b), AmountSide::A))
                .await,
            Err(LiqErr::LiqIx(LiqIxErr::ZeroAmount { field }))
        );
    }
    assert!(liq.resolver().queries().is_empty());
}

#[tokio::test]
async fn rejects_foreign_and_same_mints() {
    let pool = standard_pool();
    let liq = liquidity(existing_accs_resolver());
    let foreign = ammliq_std::typedefs::token::Token {
        mint: fixture_pk(99),
        decimals: 6,
    };
    assert_eq!(
        liq.add_liquidity(params(
            &pool,
            amt(BASE, 1),
            amt(foreign, 1),
            AmountSide::A
        ))
        .await,
        Err(LiqErr::PairAmount(PairAmountErr::MintNotInPool {
            mint: fixture_pk(99)
        }))
    );
    assert_eq!(
        liq.add_liquidity(params(&pool, amt(BASE, 1), amt(NATIVE, 1), AmountSide::A))
            .await,
        Err(LiqErr::PairAmount(PairAmountErr::SameMint {
            mint: NATIVE.mint
        }))
    );
    assert!(liq.resolver().queries().is_empty());
}

#[tokio::test]
async fn rejects_program_not_matching_version() {
    let pool = PoolInfo {
        program_id: Bs58Array(FIXTURE_STABLE_PROGRAM),
        ..standard_pool()
    };
    let liq = liquidity(existing_accs_resolver());
    let err = liq
        .add_liquidity(params(&pool, amt(BASE, 100), amt(QUOTE, 202), AmountSide::A))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LiqErr::ProgramMismatch {
            variant: PoolVariant::Standard,
            expected: FIXTURE_STANDARD_PROGRAM,
            actual: FIXTURE_STABLE_PROGRAM,
        }
    );
    assert!(liq.resolver().queries().is_empty());
}

#[tokio::test]
async fn resolver_failure_surfaces() {
    let pool = standard_pool();
    let liq = liquidity(MockResolver::failing("rpc down"));
    let err = liq
        .add_liquidity(params(
            &pool,
            amt(BASE, 100),
            amt(QUOTE, 202),
            AmountSide::A,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, LiqErr::Resolver("rpc down".to_owned()));
    assert_eq!(err.to_string(), "token account resolver: rpc down");
}

#[tokio::test]
async fn side_designator_parsed_from_str() {
    let parsed: Result<AmountSide, LiqErr> = "c".parse::<AmountSide>().map_err(LiqErr::from);
    assert!(matches!(parsed, Err(LiqErr::UnknownAmountSide(_))));
    assert_eq!("A".parse::<AmountSide>(), Ok(AmountSide::A));
}
