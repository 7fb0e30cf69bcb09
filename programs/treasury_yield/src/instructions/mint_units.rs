use super::*;

#[derive(Accounts)]
pub struct MintUnits<'info> {
    /// Principal holding the Mint capability.
    pub minter: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), recipient.owner.as_ref()],
        bump = recipient.bump,
    )]
    pub recipient: Box<Account<'info, Holder>>,

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

impl MintUnits<'_> {
    pub fn handler(mut ctx: Context<Self>, external_amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let accounts = &mut ctx.accounts;

        let mut log = ProgramLog;
        let mut env = LedgerEnv {
            ledger: ledger_key,
            caller: accounts.minter.key(),
            now,
            access: &**accounts.access_registry,
            prices: &mut **accounts.price_oracle,
            notifier: &mut log,
        };
        let units = accounts
            .ledger
            .mint(&mut env, &mut accounts.recipient, external_amount)?;

        msg!(
            "Minted {} units to {} for {} external",
            units,
            accounts.recipient.owner,
            external_amount
        );
        Ok(())
    }
}
