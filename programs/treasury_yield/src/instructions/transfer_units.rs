use super::*;

#[derive(Accounts)]
pub struct TransferUnits<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.state.external_asset.as_ref(), ledger.kind().seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump = source.bump,
    )]
    pub source: Box<Account<'info, Holder>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), destination.owner.as_ref()],
        bump = destination.bump,
    )]
    pub destination: Box<Account<'info, Holder>>,
}

impl TransferUnits<'_> {
    pub fn handler(mut ctx: Context<Self>, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let accounts = &mut ctx.accounts;

        // Self-transfers share one account; reject before Anchor writes it back twice.
        require_keys_neq!(
            accounts.source.key(),
            accounts.destination.key(),
            LedgerError::SelfTransfer
        );

        let mut prices = NoPrices;
        let mut log = ProgramLog;
        let mut env = LedgerEnv {
            ledger: ledger_key,
            caller: accounts.owner.key(),
            now,
            access: &NoAuthority,
            prices: &mut prices,
            notifier: &mut log,
        };
        accounts.ledger.transfer(
            &mut env,
            &mut accounts.source,
            &mut accounts.destination,
            amount,
        )?;

        msg!(
            "Transferred {} units {} -> {}",
            amount,
            accounts.source.owner,
            accounts.destination.owner
        );
        Ok(())
    }
}
