use super::*;

/// One side of a balance movement, with its list membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Party {
    pub key: Pubkey,
    pub whitelisted: bool,
    pub blacklisted: bool,
}

/// Decides whether a balance movement may happen. `None` on a side stands for
/// the mint source or the burn sink.
pub struct ComplianceGate<'a> {
    state: &'a LedgerState,
    reserved: &'a Pubkey,
}

impl<'a> ComplianceGate<'a> {
    /// `reserved` is the ledger's own address, exempt from list checks.
    pub fn new(state: &'a LedgerState, reserved: &'a Pubkey) -> Self {
        Self { state, reserved }
    }

    pub fn can_mutate(&self, from: Option<&Party>, to: Option<&Party>) -> Result<()> {
        require!(!self.state.paused, LedgerError::Paused);

        if let Some(party) = from {
            require_keys_neq!(party.key, NULL_PRINCIPAL, LedgerError::InvalidPrincipal);
        }
        if let Some(party) = to {
            require_keys_neq!(party.key, NULL_PRINCIPAL, LedgerError::InvalidPrincipal);
        }

        // Blacklist wins over whitelist and ignores enforcement.
        if let Some(party) = from {
            require!(
                self.is_reserved(party) || !party.blacklisted,
                LedgerError::SenderBlacklisted
            );
        }
        if let Some(party) = to {
            require!(
                self.is_reserved(party) || !party.blacklisted,
                LedgerError::RecipientBlacklisted
            );
        }

        if self.state.whitelist_enforced {
            if let Some(party) = from {
                require!(
                    self.is_reserved(party) || party.whitelisted,
                    LedgerError::SenderNotWhitelisted
                );
            }
            if let Some(party) = to {
                require!(
                    self.is_reserved(party) || party.whitelisted,
                    LedgerError::RecipientNotWhitelisted
                );
            }
        }

        Ok(())
    }

    fn is_reserved(&self, party: &Party) -> bool {
        party.key == *self.reserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(whitelist_enforced: bool, paused: bool) -> LedgerState {
        LedgerState {
            whitelist_enforced,
            paused,
            ..LedgerState::default()
        }
    }

    fn party(whitelisted: bool, blacklisted: bool) -> Party {
        Party {
            key: Pubkey::new_unique(),
            whitelisted,
            blacklisted,
        }
    }

    fn denied(result: Result<()>, expected: LedgerError) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    #[test]
    fn pause_blocks_everything() {
        let s = state(false, true);
        let ledger = Pubkey::new_unique();
        let gate = ComplianceGate::new(&s, &ledger);
        let ok = party(true, false);

        denied(gate.can_mutate(None, Some(&ok)), LedgerError::Paused);
        denied(gate.can_mutate(Some(&ok), None), LedgerError::Paused);
        denied(gate.can_mutate(Some(&ok), Some(&party(true, false))), LedgerError::Paused);
    }

    #[test]
    fn blacklist_applies_without_enforcement() {
        let s = state(false, false);
        let ledger = Pubkey::new_unique();
        let gate = ComplianceGate::new(&s, &ledger);
        let listed_and_banned = party(true, true);
        let plain = party(false, false);

        denied(
            gate.can_mutate(Some(&listed_and_banned), Some(&plain)),
            LedgerError::SenderBlacklisted,
        );
        denied(
            gate.can_mutate(Some(&plain), Some(&listed_and_banned)),
            LedgerError::RecipientBlacklisted,
        );
        denied(gate.can_mutate(None, Some(&listed_and_banned)), LedgerError::RecipientBlacklisted);
        denied(gate.can_mutate(Some(&listed_and_banned), None), LedgerError::SenderBlacklisted);
        assert!(gate.can_mutate(Some(&plain), Some(&party(false, false))).is_ok());
    }

    #[test]
    fn whitelist_only_when_enforced() {
        let ledger = Pubkey::new_unique();
        let plain = party(false, false);
        let approved = party(true, false);

        let enforced = state(true, false);
        let gate = ComplianceGate::new(&enforced, &ledger);
        denied(gate.can_mutate(Some(&approved), Some(&plain)), LedgerError::RecipientNotWhitelisted);
        denied(gate.can_mutate(Some(&plain), Some(&approved)), LedgerError::SenderNotWhitelisted);
        denied(gate.can_mutate(None, Some(&plain)), LedgerError::RecipientNotWhitelisted);
        assert!(gate.can_mutate(None, Some(&approved)).is_ok());
        assert!(gate.can_mutate(Some(&approved), None).is_ok());

        let relaxed = state(false, false);
        let gate = ComplianceGate::new(&relaxed, &ledger);
        assert!(gate.can_mutate(Some(&approved), Some(&plain)).is_ok());
    }

    #[test]
    fn reserved_address_is_exempt_from_whitelist() {
        let s = state(true, false);
        let ledger = Pubkey::new_unique();
        let gate = ComplianceGate::new(&s, &ledger);
        let reserved = Party {
            key: ledger,
            whitelisted: false,
            blacklisted: false,
        };

        assert!(gate.can_mutate(Some(&reserved), Some(&party(true, false))).is_ok());
        assert!(gate.can_mutate(None, Some(&reserved)).is_ok());
    }

    #[test]
    fn null_principal_is_rejected() {
        let s = state(false, false);
        let ledger = Pubkey::new_unique();
        let gate = ComplianceGate::new(&s, &ledger);
        let null = Party {
            key: NULL_PRINCIPAL,
            whitelisted: true,
            blacklisted: false,
        };

        denied(gate.can_mutate(None, Some(&null)), LedgerError::InvalidPrincipal);
    }
}
