use super::*;

/// Everything a ledger operation needs from outside its own account.
pub struct LedgerEnv<'a> {
    /// The ledger account's address. Doubles as its price key and as the
    /// reserved address in compliance checks.
    pub ledger: Pubkey,
    pub caller: Pubkey,
    pub now: i64,
    pub access: &'a dyn AccessAuthority,
    pub prices: &'a mut dyn PriceAuthority,
    pub notifier: &'a mut dyn Notifier,
}

impl<'a> LedgerEnv<'a> {
    pub fn require(&self, capability: Capability) -> Result<()> {
        require_capability(self.access, &self.caller, capability)
    }

    pub fn notify(&mut self, event: LedgerEvent) {
        self.notifier.notify(event);
    }
}

/// Authority for paths that need no capability; grants nothing.
pub struct NoAuthority;

impl AccessAuthority for NoAuthority {
    fn has_capability(&self, _: &Pubkey, _: Capability) -> bool {
        false
    }
}

/// Price authority for paths that never consult a price.
pub struct NoPrices;

impl PriceAuthority for NoPrices {
    fn get_price(&self, _: &Pubkey) -> Result<u128> {
        err!(LedgerError::PriceFeedNotFound)
    }

    fn set_price(&mut self, _: &Pubkey, _: u128) -> Result<()> {
        err!(LedgerError::PriceFeedNotFound)
    }

    fn get_rate(&self, _: &Pubkey) -> Result<u16> {
        err!(LedgerError::PriceFeedNotFound)
    }

    fn set_rate(&mut self, _: &Pubkey, _: u16) -> Result<()> {
        err!(LedgerError::PriceFeedNotFound)
    }
}
