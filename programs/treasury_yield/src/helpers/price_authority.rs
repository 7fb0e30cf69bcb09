use super::*;

/// Key-value store of price and yield rate per ledger. Who may write is the
/// store owner's concern, not the ledger's.
pub trait PriceAuthority {
    fn get_price(&self, ledger: &Pubkey) -> Result<u128>;
    fn set_price(&mut self, ledger: &Pubkey, price: u128) -> Result<()>;
    fn get_rate(&self, ledger: &Pubkey) -> Result<u16>;
    fn set_rate(&mut self, ledger: &Pubkey, rate_bps: u16) -> Result<()>;
}
