use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace, Debug, PartialEq)]
pub struct PriceFeed {
    pub ledger: Pubkey,
    pub price: u128,
    pub rate_bps: u16,
}

/// Price and rate store keyed by ledger address. A feed exists only once its
/// ledger has been registered by the oracle admin.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct PriceOracle {
    pub bump: u8,
    pub admin: Pubkey,
    #[max_len(8)]
    pub feeds: Vec<PriceFeed>,
}

impl PriceOracle {
    pub fn initialize(&mut self, admin: Pubkey, bump: u8) -> Result<()> {
        require_keys_neq!(admin, NULL_PRINCIPAL, LedgerError::InvalidPrincipal);

        self.bump = bump;
        self.admin = admin;
        self.feeds = Vec::new();
        Ok(())
    }

    pub fn register_feed(&mut self, ledger: Pubkey, price: u128, rate_bps: u16) -> Result<()> {
        require!(price > 0, LedgerError::InvalidPrice);
        require!(rate_bps <= BASIS_POINT_MAX, LedgerError::InvalidYieldRate);

        if let Some(feed) = self.feeds.iter_mut().find(|f| f.ledger == ledger) {
            feed.price = price;
            feed.rate_bps = rate_bps;
            return Ok(());
        }

        require!(self.feeds.len() < MAX_PRICE_FEEDS, LedgerError::PriceOracleFull);
        self.feeds.push(PriceFeed {
            ledger,
            price,
            rate_bps,
        });
        Ok(())
    }

    fn feed(&self, ledger: &Pubkey) -> Result<&PriceFeed> {
        self.feeds
            .iter()
            .find(|f| f.ledger == *ledger)
            .ok_or_else(|| error!(LedgerError::PriceFeedNotFound))
    }

    fn feed_mut(&mut self, ledger: &Pubkey) -> Result<&mut PriceFeed> {
        self.feeds
            .iter_mut()
            .find(|f| f.ledger == *ledger)
            .ok_or_else(|| error!(LedgerError::PriceFeedNotFound))
    }
}

impl PriceAuthority for PriceOracle {
    fn get_price(&self, ledger: &Pubkey) -> Result<u128> {
        Ok(self.feed(ledger)?.price)
    }

    fn set_price(&mut self, ledger: &Pubkey, price: u128) -> Result<()> {
        require!(price > 0, LedgerError::InvalidPrice);
        self.feed_mut(ledger)?.price = price;
        Ok(())
    }

    fn get_rate(&self, ledger: &Pubkey) -> Result<u16> {
        Ok(self.feed(ledger)?.rate_bps)
    }

    fn set_rate(&mut self, ledger: &Pubkey, rate_bps: u16) -> Result<()> {
        require!(rate_bps <= BASIS_POINT_MAX, LedgerError::InvalidYieldRate);
        self.feed_mut(ledger)?.rate_bps = rate_bps;
        Ok(())
    }
}
