use super::*;

#[derive(Accounts)]
pub struct RedeemUnits<'info> {
    /// Principal holding the Redeem capability.
    pub redeemer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Position the units are debited from.
    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), source.owner.as_ref()],
        bump = source.bump,
    )]
    pub source: Box<Account<'info, Holder>>,

    #[account(
        constraint = access_registry.key() == ledger.state.access_registry @ LedgerError::Unauthorized,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    #[account(
        mut,
        constraint = price_oracle.key() == ledger.state.price_authority @ LedgerError::PriceFeedNotFound,
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,
}

impl RedeemUnits<'_> {
    pub fn handler(mut ctx: Context<Self>, unit_amount: u64) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let accounts = &mut ctx.accounts;

        let mut log = ProgramLog;
        let mut env = LedgerEnv {
            ledger: ledger_key,
            caller: accounts.redeemer.key(),
            now,
            access: &**accounts.access_registry,
            prices: &mut **accounts.price_oracle,
            notifier: &mut log,
        };
        let external_amount = accounts
            .ledger
            .redeem(&mut env, &mut accounts.source, unit_amount)?;

        msg!(
            "Redeemed {} units from {} for {} external",
            unit_amount,
            accounts.source.owner,
            external_amount
        );
        Ok(external_amount)
    }
}
