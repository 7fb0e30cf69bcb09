use super::*;

#[derive(Accounts)]
#[instruction(params: LedgerParams)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED, external_asset.key().as_ref(), params.strategy.seed()],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// The unit of external value this ledger is denominated in.
    pub external_asset: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        seeds = [ACCESS_SEED],
        bump = access_registry.bump,
        constraint = access_registry.admin == authority.key() @ LedgerError::Unauthorized,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        mut,
        seeds = [PRICE_ORACLE_SEED],
        bump = price_oracle.bump,
        constraint = price_oracle.admin == authority.key() @ LedgerError::Unauthorized,
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,

    pub system_program: Program<'info, System>,
}

impl InitializeLedger<'_> {
    pub fn handler(mut ctx: Context<Self>, params: LedgerParams) -> Result<()> {
        params.validate()?;

        let bump = ctx.bumps.ledger;
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let accounts = &mut ctx.accounts;

        accounts
            .price_oracle
            .register_feed(ledger_key, params.initial_price(), params.yield_rate_bps)?;

        let bindings = LedgerBindings {
            authority: accounts.authority.key(),
            external_asset: accounts.external_asset.key(),
            external_decimals: accounts.external_asset.decimals,
            price_authority: accounts.price_oracle.key(),
            access_registry: accounts.access_registry.key(),
        };

        let mut log = ProgramLog;
        let mut env = LedgerEnv {
            ledger: ledger_key,
            caller: bindings.authority,
            now,
            access: &**accounts.access_registry,
            prices: &mut **accounts.price_oracle,
            notifier: &mut log,
        };
        let ledger = Ledger::create(bump, bindings, &params, &mut env)?;
        accounts.ledger.set_inner(ledger);

        msg!(
            "Initialized {:?} ledger for asset {}",
            params.strategy,
            bindings.external_asset
        );

        Ok(())
    }
}
