use super::*;

#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        constraint = price_oracle.key() == ledger.state.price_authority @ LedgerError::PriceFeedNotFound,
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,
}

#[derive(Accounts)]
pub struct HolderView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        seeds = [HOLDER_SEED, ledger.key().as_ref(), holder.owner.as_ref()],
        bump = holder.bump,
    )]
    pub holder: Box<Account<'info, Holder>>,

    #[account(
        constraint = price_oracle.key() == ledger.state.price_authority @ LedgerError::PriceFeedNotFound,
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,
}

fn now() -> Result<i64> {
    Ok(Clock::get()?.unix_timestamp)
}

pub fn handle_balance_of(ctx: Context<HolderView>) -> Result<u64> {
    ctx.accounts.ledger.balance_of(&ctx.accounts.holder, now()?)
}

/// Stored balance: scaled units on a rebasing ledger, nominal units otherwise.
pub fn handle_scaled_balance_of(ctx: Context<HolderView>) -> Result<u64> {
    Ok(ctx.accounts.holder.balance)
}

pub fn handle_value_of(ctx: Context<HolderView>) -> Result<u64> {
    let accounts = &ctx.accounts;
    accounts.ledger.value_of(
        &**accounts.price_oracle,
        &accounts.ledger.key(),
        &accounts.holder,
        now()?,
    )
}

pub fn handle_total_supply(ctx: Context<LedgerView>) -> Result<u64> {
    ctx.accounts.ledger.total_supply(now()?)
}

pub fn handle_current_index(ctx: Context<LedgerView>) -> Result<u128> {
    ctx.accounts.ledger.current_index(now()?)
}

pub fn handle_get_price(ctx: Context<LedgerView>) -> Result<u128> {
    ctx.accounts
        .price_oracle
        .get_price(&ctx.accounts.ledger.key())
}

pub fn handle_preview_exchange(
    ctx: Context<LedgerView>,
    args: PreviewExchangeArgs,
) -> Result<PreviewExchangeResult> {
    let accounts = &ctx.accounts;
    accounts.ledger.preview_exchange(
        &**accounts.price_oracle,
        &accounts.ledger.key(),
        now()?,
        args,
    )
}
