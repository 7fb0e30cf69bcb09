use super::*;

#[derive(Accounts)]
pub struct UpdateListing<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// CHECK: only the key is used; the principal need not have opened a holder yet
    pub principal: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), principal.key().as_ref()],
        bump
    )]
    pub holder: Box<Account<'info, Holder>>,

    #[account(
        constraint = access_registry.key() == ledger.state.access_registry @ LedgerError::Unauthorized,
    )]
    pub access_registry: Box<Account<'info, AccessRegistry>>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Whitelist,
    Blacklist,
}

impl UpdateListing<'_> {
    pub fn handler(mut ctx: Context<Self>, listing: Listing, listed: bool) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let bump = ctx.bumps.holder;
        let accounts = &mut ctx.accounts;

        if !accounts.holder.is_initialized() {
            accounts
                .holder
                .initialize(ledger_key, accounts.principal.key(), bump)?;
        }

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

        match listing {
            Listing::Whitelist => accounts
                .ledger
                .set_whitelisted(&mut env, &mut **accounts.holder, listed)?,
            Listing::Blacklist => accounts
                .ledger
                .set_blacklisted(&mut env, &mut **accounts.holder, listed)?,
        }

        msg!("{:?} {} -> {}", listing, accounts.principal.key(), listed);
        Ok(())
    }
}
