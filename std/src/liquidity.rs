use ammliq_core::{
    instructions::liquidity::{
        add::AddLiquidityIxArgs,
        remove::{RemoveLiquidityIxArgs, RemoveLiquidityIxKeysOwned},
        IxKeys,
    },
    quote::{
        pair::{quote_pair_amount, PairAmount, PairAmountArgs, PairAmountErr},
        withdraw::{quote_remove_liquidity, RemoveLiqQuoteArgs},
    },
    typedefs::{
        amount_side::AmountSide,
        base_quote::{BaseQuote, Side},
        keys::{AmmKeys, MarketKeys, UserKeys},
        mint::normalize_mint,
        pool_variant::PoolVariant,
        slippage::Slippage,
        token::{Token, TokenAmount},
    },
};
use tracing::{debug, debug_span, warn, Instrument};

use crate::{
    config::LiquidityConfig,
    err::{LiqErr, LiqIxErr},
    instruction::{add_liquidity_ix, remove_liquidity_ix},
    interface::pk_str,
    pool::PoolInfo,
    token_accounts::{TokenAccDirection, TokenAccQuery, TokenAccountResolver},
    tx::{InstructionType, LiquidityTx, TxBuilder},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityParams<'a> {
    pub pool: &'a PoolInfo,
    pub owner: [u8; 32],
    pub amount_in_a: TokenAmount,
    pub amount_in_b: TokenAmount,

    /// Which of `amount_in_a`, `amount_in_b` is deposited exactly.
    /// The other is the max the owner authorizes.
    pub fixed_side: AmountSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityParams<'a> {
    pub pool: &'a PoolInfo,
    pub owner: [u8; 32],
    pub lp_amount: u64,
}

/// Entrypoint for computing and building liquidity operations
#[derive(Debug, Clone)]
pub struct Liquidity<R> {
    config: LiquidityConfig,
    resolver: R,
}

impl<R> Liquidity<R> {
    #[inline]
    pub const fn new(config: LiquidityConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    #[inline]
    pub const fn config(&self) -> &LiquidityConfig {
        &self.config
    }

    #[inline]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Amount of `another` to deposit alongside `amount` at the pool's
    /// current ratio, and that amount inflated by `slippage`
    pub fn compute_pair_amount(
        &self,
        pool: &PoolInfo,
        amount: &TokenAmount,
        another: &Token,
        slippage: Slippage,
    ) -> Result<PairAmount, LiqErr> {
        let reserves = pool.raw_reserves()?;
        let res = quote_pair_amount(PairAmountArgs {
            pool_tokens: pool.pool_tokens(),
            reserves,
            amount: *amount,
            another: *another,
            slippage,
        })?;
        debug!(
            pool = %pk_str(&pool.id.0),
            fixed_side = ?res.fixed_side,
            another = res.another.amt,
            max_another = res.max_another.amt,
            %slippage,
            "computed pair amount"
        );
        Ok(res)
    }

    #[inline]
    pub fn compute_pair_amount_default_slippage(
        &self,
        pool: &PoolInfo,
        amount: &TokenAmount,
        another: &Token,
    ) -> Result<PairAmount, LiqErr> {
        self.compute_pair_amount(pool, amount, another, self.config.default_slippage)
    }

    /// Estimated base and quote amounts returned for burning `lp_amount`
    pub fn compute_remove_amounts(
        &self,
        pool: &PoolInfo,
        lp_amount: u64,
    ) -> Result<BaseQuote<TokenAmount>, LiqErr> {
        let amts = quote_remove_liquidity(RemoveLiqQuoteArgs {
            lp_amt: lp_amount,
            lp_supply: pool.raw_lp_supply()?,
            reserves: pool.raw_reserves()?,
        })?;
        let tokens = pool.pool_tokens();
        Ok(BaseQuote {
            base: TokenAmount::new(tokens.base, amts.base),
            quote: TokenAmount::new(tokens.quote, amts.quote),
        })
    }
}

impl<R: TokenAccountResolver> Liquidity<R> {
    pub async fn add_liquidity(
        &self,
        params: AddLiquidityParams<'_>,
    ) -> Result<LiquidityTx, LiqErr> {
        let span = debug_span!("add_liquidity", pool = %pk_str(&params.pool.id.0));
        async {
            self.add_liquidity_inner(params)
                .await
                .inspect_err(|err| warn!(%err, "add liquidity rejected"))
        }
        .instrument(span)
        .await
    }

    pub async fn remove_liquidity(
        &self,
        params: RemoveLiquidityParams<'_>,
    ) -> Result<LiquidityTx, LiqErr> {
        let span = debug_span!("remove_liquidity", pool = %pk_str(&params.pool.id.0));
        async {
            self.remove_liquidity_inner(params)
                .await
                .inspect_err(|err| warn!(%err, "remove liquidity rejected"))
        }
        .instrument(span)
        .await
    }

    async fn add_liquidity_inner(
        &self,
        AddLiquidityParams {
            pool,
            owner,
            amount_in_a,
            amount_in_b,
            fixed_side,
        }: AddLiquidityParams<'_>,
    ) -> Result<LiquidityTx, LiqErr> {
        if amount_in_a.is_zero() {
            return Err(LiqIxErr::ZeroAmount {
                field: "amount_in_a",
            }
            .into());
        }
        if amount_in_b.is_zero() {
            return Err(LiqIxErr::ZeroAmount {
                field: "amount_in_b",
            }
            .into());
        }
        self.check_program(pool)?;

        let variant = pool.variant();
        let (amounts, side_a) = orient(pool, &amount_in_a, &amount_in_b)?;
        let fixed = match fixed_side {
            AmountSide::A => side_a,
            AmountSide::B => side_a.other(),
        };
        debug!(
            ?variant,
            base = amounts.base.amt,
            quote = amounts.quote.amt,
            ?fixed,
            "oriented amounts"
        );

        let mut tx = TxBuilder::new();
        let base_token_acc = self
            .resolve(
                &mut tx,
                TokenAccQuery {
                    owner,
                    mint: amounts.base.token.mint,
                    token_program: self.config.token_program.0,
                    direction: TokenAccDirection::In,
                    amount: amounts.base.amt,
                    create_if_missing: true,
                },
            )
            .await?;
        let quote_token_acc = self
            .resolve(
                &mut tx,
                TokenAccQuery {
                    owner,
                    mint: amounts.quote.token.mint,
                    token_program: self.config.token_program.0,
                    direction: TokenAccDirection::In,
                    amount: amounts.quote.amt,
                    create_if_missing: true,
                },
            )
            .await?;
        let lp_token_acc = self
            .resolve(
                &mut tx,
                TokenAccQuery {
                    owner,
                    mint: pool.lp_mint.0,
                    token_program: self.config.token_program.0,
                    direction: TokenAccDirection::Out,
                    amount: 0,
                    create_if_missing: true,
                },
            )
            .await?;

        let amm = pool.amm_keys();
        let market = pool.market_keys();
        let user = UserKeys {
            base_token_acc,
            quote_token_acc,
            lp_token_acc,
            owner,
        };
        let args = AddLiquidityIxArgs::try_new(
            variant,
            self.ix_keys(&amm, &market, &user),
            amounts.map(|a| a.amt),
            fixed,
        )?;
        tx.add_ix(
            add_liquidity_ix(&args),
            match variant {
                PoolVariant::Standard => InstructionType::AmmV4AddLiquidity,
                PoolVariant::Stable => InstructionType::AmmV5AddLiquidity,
            },
        );
        Ok(tx.build())
    }

    async fn remove_liquidity_inner(
        &self,
        RemoveLiquidityParams {
            pool,
            owner,
            lp_amount,
        }: RemoveLiquidityParams<'_>,
    ) -> Result<LiquidityTx, LiqErr> {
        if lp_amount == 0 {
            return Err(LiqIxErr::ZeroAmount { field: "lp_amount" }.into());
        }
        self.check_program(pool)?;
        let variant = pool.variant();
        let amm = pool.amm_keys();
        RemoveLiquidityIxKeysOwned::check_amm_keys(variant, &amm)?;

        let tokens = pool.pool_tokens();
        let mut tx = TxBuilder::new();
        let lp_token_acc = self
            .resolve(
                &mut tx,
                TokenAccQuery {
                    owner,
                    mint: pool.lp_mint.0,
                    token_program: self.config.token_program.0,
                    direction: TokenAccDirection::In,
                    amount: lp_amount,
                    create_if_missing: false,
                },
            )
            .await?;
        let base_token_acc = self
            .resolve(
                &mut tx,
                TokenAccQuery {
                    owner,
                    mint: tokens.base.mint,
                    token_program: self.config.token_program.0,
                    direction: TokenAccDirection::Out,
                    amount: 0,
                    create_if_missing: true,
                },
            )
            .await?;
        let quote_token_acc = self
            .resolve(
                &mut tx,
                TokenAccQuery {
                    owner,
                    mint: tokens.quote.mint,
                    token_program: self.config.token_program.0,
                    direction: TokenAccDirection::Out,
                    amount: 0,
                    create_if_missing: true,
                },
            )
            .await?;

        let market = pool.market_keys();
        let user = UserKeys {
            base_token_acc,
            quote_token_acc,
            lp_token_acc,
            owner,
        };
        let args =
            RemoveLiquidityIxArgs::try_new(variant, self.ix_keys(&amm, &market, &user), lp_amount)?;
        tx.add_ix(
            remove_liquidity_ix(&args),
            match variant {
                PoolVariant::Standard => InstructionType::AmmV4RemoveLiquidity,
                PoolVariant::Stable => InstructionType::AmmV5RemoveLiquidity,
            },
        );
        Ok(tx.build())
    }

    /// The pool must be owned by the program its version targets
    fn check_program(&self, pool: &PoolInfo) -> Result<(), LiqErr> {
        let variant = pool.variant();
        let expected = *self.config.program_id(variant);
        let actual = pool.program_id.0;
        if expected == actual {
            Ok(())
        } else {
            Err(LiqErr::ProgramMismatch {
                variant,
                expected,
                actual,
            })
        }
    }

    async fn resolve(
        &self,
        tx: &mut TxBuilder,
        query: TokenAccQuery,
    ) -> Result<[u8; 32], LiqErr> {
        let resolved = self
            .resolver
            .resolve(query)
            .await
            .map_err(|e| LiqErr::Resolver(e.to_string()))?
            .ok_or(LiqErr::MissingTokenAcc { mint: query.mint })?;
        debug!(
            mint = %pk_str(&query.mint),
            address = %pk_str(&resolved.address),
            setup = resolved.setup.len(),
            cleanup = resolved.cleanup.len(),
            "resolved token account"
        );
        Ok(tx.add_token_acc(resolved))
    }

    fn ix_keys<'a>(
        &'a self,
        amm: &'a AmmKeys,
        market: &'a MarketKeys,
        user: &'a UserKeys,
    ) -> IxKeys<'a> {
        IxKeys {
            amm,
            market,
            user,
            token_program: &self.config.token_program.0,
            model_data: &self.config.model_data.0,
        }
    }
}

/// Maps caller amounts `a, b` onto the pool's base and quote sides,
/// returning the side `a` landed on
fn orient(
    pool: &PoolInfo,
    a: &TokenAmount,
    b: &TokenAmount,
) -> Result<(BaseQuote<TokenAmount>, Side), LiqErr> {
    let pool_mints = pool.pool_tokens().map(|t| t.mint);
    let side_of = |amt: &TokenAmount| {
        pool_mints
            .side_of(&normalize_mint(&amt.token.mint))
            .ok_or(PairAmountErr::MintNotInPool {
                mint: amt.token.mint,
            })
    };
    let side_a = side_of(a)?;
    let side_b = side_of(b)?;
    if side_a == side_b {
        return Err(PairAmountErr::SameMint {
            mint: b.token.mint,
        }
        .into());
    }
    let amounts = BaseQuote { base: *a, quote: *b };
    Ok(match side_a {
        Side::Base => (amounts, side_a),
        Side::Quote => (amounts.swapped(), side_a),
    })
}
