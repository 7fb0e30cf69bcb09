use super::*;

#[derive(Accounts)]
pub struct InitializePriceOracle<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + PriceOracle::INIT_SPACE,
        seeds = [PRICE_ORACLE_SEED],
        bump
    )]
    pub price_oracle: Box<Account<'info, PriceOracle>>,

    pub system_program: Program<'info, System>,
}

impl InitializePriceOracle<'_> {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        ctx.accounts
            .price_oracle
            .initialize(admin, ctx.bumps.price_oracle)?;

        let clock = Clock::get()?;
        emit!(PriceOracleInitializedEvent {
            oracle: ctx.accounts.price_oracle.key(),
            admin,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
