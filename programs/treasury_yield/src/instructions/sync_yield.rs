use super::*;

#[derive(Accounts)]
pub struct SyncYield<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

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

impl SyncYield<'_> {
    /// Returns the price (appreciating) or rebase index (rebasing) after the sync.
    pub fn handler(mut ctx: Context<Self>) -> Result<u128> {
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let accounts = &mut ctx.accounts;

        let mut log = ProgramLog;
        let mut env = LedgerEnv {
            ledger: ledger_key,
            caller: accounts.caller.key(),
            now,
            access: &**accounts.access_registry,
            prices: &mut **accounts.price_oracle,
            notifier: &mut log,
        };
        let value = accounts.ledger.sync_yield(&mut env)?;

        msg!("Synced {:?} ledger: {}", accounts.ledger.kind(), value);
        Ok(value)
    }
}
