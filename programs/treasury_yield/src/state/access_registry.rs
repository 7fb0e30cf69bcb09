use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace, Debug, PartialEq)]
pub struct RoleGrant {
    pub principal: Pubkey,
    pub capabilities: u8, // bitmask of Capability::bit()
}

/// Capability registry consulted by every privileged ledger call. The admin
/// holds every capability; everyone else only what their grant lists.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct AccessRegistry {
    pub bump: u8,
    pub admin: Pubkey,
    #[max_len(16)]
    pub grants: Vec<RoleGrant>,
}

impl AccessRegistry {
    pub fn initialize(&mut self, admin: Pubkey, bump: u8, grants: Vec<RoleGrant>) -> Result<()> {
        require_keys_neq!(admin, NULL_PRINCIPAL, LedgerError::InvalidPrincipal);
        require!(grants.len() <= MAX_ROLE_GRANTS, LedgerError::TooManyGrants);

        for grant in grants.iter() {
            require_keys_neq!(grant.principal, NULL_PRINCIPAL, LedgerError::InvalidPrincipal);
            require!(
                grant.capabilities & !Capability::ALL_BITS == 0,
                LedgerError::InvalidCapability
            );
        }

        self.bump = bump;
        self.admin = admin;
        self.grants = grants;
        Ok(())
    }
}

impl AccessAuthority for AccessRegistry {
    fn has_capability(&self, principal: &Pubkey, capability: Capability) -> bool {
        if *principal == NULL_PRINCIPAL {
            return false;
        }
        if *principal == self.admin {
            return true;
        }
        self.grants
            .iter()
            .any(|g| g.principal == *principal && g.capabilities & capability.bit() != 0)
    }
}
