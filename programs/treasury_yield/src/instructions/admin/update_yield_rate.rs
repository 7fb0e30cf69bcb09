use super::*;

#[derive(Accounts)]
pub struct UpdateYieldRate<'info> {
    pub authority: Signer<'info>,

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

pub fn handle_update_yield_rate(mut ctx: Context<UpdateYieldRate>, new_rate_bps: u16) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();
    let accounts = &mut ctx.accounts;

    let mut log = ProgramLog;
    let mut env = LedgerEnv {
        ledger: ledger_key,
        caller: accounts.authority.key(),
        now,
        access: &**accounts.access_registry,
        prices: &mut **accounts.price_oracle,
        notifier: &mut log,
    };
    accounts.ledger.set_yield_rate(&mut env, new_rate_bps)
}
