use super::*;

#[derive(Accounts)]
pub struct OpenHolder<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init,
        payer = owner,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub holder: Box<Account<'info, Holder>>,

    pub system_program: Program<'info, System>,
}

impl OpenHolder<'_> {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let ledger = ctx.accounts.ledger.key();
        let owner = ctx.accounts.owner.key();

        ctx.accounts
            .holder
            .initialize(ledger, owner, ctx.bumps.holder)?;

        let clock = Clock::get()?;
        emit!(HolderOpenedEvent {
            ledger,
            holder: ctx.accounts.holder.key(),
            owner,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
