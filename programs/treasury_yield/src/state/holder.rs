use super::*;

/// A principal's position in one ledger. `balance` is nominal units on an
/// appreciating ledger and scaled units on a rebasing one.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Holder {
    pub bump: u8,
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub balance: u64,
    pub whitelisted: bool,
    pub blacklisted: bool,
}

const_assert_eq!(Holder::INIT_SPACE, 75);

impl Holder {
    pub fn initialize(&mut self, ledger: Pubkey, owner: Pubkey, bump: u8) -> Result<()> {
        require_keys_neq!(owner, NULL_PRINCIPAL, LedgerError::InvalidPrincipal);

        self.bump = bump;
        self.ledger = ledger;
        self.owner = owner;
        self.balance = 0;
        self.whitelisted = false;
        self.blacklisted = false;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != NULL_PRINCIPAL
    }

    pub fn party(&self) -> Party {
        Party {
            key: self.owner,
            whitelisted: self.whitelisted,
            blacklisted: self.blacklisted,
        }
    }

    pub fn check_ledger(&self, ledger: &Pubkey) -> Result<()> {
        require_keys_eq!(self.ledger, *ledger, LedgerError::InvalidHolder);
        require!(self.is_initialized(), LedgerError::InvalidHolder);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_rejects_null_owner() {
        let mut holder = Holder::default();
        let err = holder
            .initialize(Pubkey::new_unique(), NULL_PRINCIPAL, 255)
            .unwrap_err();
        assert_eq!(err, Error::from(LedgerError::InvalidPrincipal));
        assert!(!holder.is_initialized());
    }

    #[test]
    fn holder_is_bound_to_its_ledger() {
        let ledger = Pubkey::new_unique();
        let mut holder = Holder::default();
        holder.initialize(ledger, Pubkey::new_unique(), 254).unwrap();

        assert!(holder.check_ledger(&ledger).is_ok());
        assert_eq!(
            holder.check_ledger(&Pubkey::new_unique()).unwrap_err(),
            Error::from(LedgerError::InvalidHolder)
        );
    }
}
