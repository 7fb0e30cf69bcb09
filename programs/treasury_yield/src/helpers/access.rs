use super::*;

/// Privileged actions a principal may be authorized for.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Mint,
    Redeem,
    RateSet,
    Pause,
    ListAdmin,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Mint,
        Capability::Redeem,
        Capability::RateSet,
        Capability::Pause,
        Capability::ListAdmin,
    ];

    pub const ALL_BITS: u8 = 0b1_1111;

    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn mask(capabilities: &[Capability]) -> u8 {
        capabilities.iter().fold(0, |acc, c| acc | c.bit())
    }
}

/// Answers "may `principal` perform `capability`". The ledger never decides
/// this itself.
pub trait AccessAuthority {
    fn has_capability(&self, principal: &Pubkey, capability: Capability) -> bool;
}

pub fn require_capability(
    access: &dyn AccessAuthority,
    principal: &Pubkey,
    capability: Capability,
) -> Result<()> {
    if !access.has_capability(principal, capability) {
        msg!("{} is missing capability {:?}", principal, capability);
        return err!(LedgerError::Unauthorized);
    }
    Ok(())
}
