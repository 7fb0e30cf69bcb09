use super::*;

#[derive(Accounts)]
pub struct InitializeAccessRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + AccessRegistry::INIT_SPACE,
        seeds = [ACCESS_SEED],
        bump
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    pub system_program: Program<'info, System>,
}

impl InitializeAccessRegistry<'_> {
    pub fn handler(ctx: Context<Self>, grants: Vec<RoleGrant>) -> Result<()> {
        let admin = ctx.accounts.admin.key();

        ctx.accounts
            .access_registry
            .initialize(admin, ctx.bumps.access_registry, grants)?;
        // Bounded by MAX_ROLE_GRANTS once initialize succeeds.
        let grant_count = ctx.accounts.access_registry.grants.len() as u8;

        msg!("Access registry initialized with {} grants", grant_count);

        let clock = Clock::get()?;
        emit!(AccessRegistryInitializedEvent {
            registry: ctx.accounts.access_registry.key(),
            admin,
            grants: grant_count,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
