use super::*;

#[derive(Accounts)]
pub struct UpdateLedgerFlags<'info> {
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
}

pub fn handle_set_paused(mut ctx: Context<UpdateLedgerFlags>, paused: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();
    let accounts = &mut ctx.accounts;

    let mut prices = NoPrices;
    let mut log = ProgramLog;
    let mut env = LedgerEnv {
        ledger: ledger_key,
        caller: accounts.authority.key(),
        now,
        access: &**accounts.access_registry,
        prices: &mut prices,
        notifier: &mut log,
    };
    accounts.ledger.set_paused(&mut env, paused)?;

    msg!("Ledger {} paused: {}", ledger_key, paused);
    Ok(())
}

pub fn handle_set_whitelist_enforced(mut ctx: Context<UpdateLedgerFlags>, enforced: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();
    let accounts = &mut ctx.accounts;

    let mut prices = NoPrices;
    let mut log = ProgramLog;
    let mut env = LedgerEnv {
        ledger: ledger_key,
        caller: accounts.authority.key(),
        now,
        access: &**accounts.access_registry,
        prices: &mut prices,
        notifier: &mut log,
    };
    accounts.ledger.set_whitelist_enforced(&mut env, enforced)?;

    msg!("Ledger {} whitelist enforced: {}", ledger_key, enforced);
    Ok(())
}
