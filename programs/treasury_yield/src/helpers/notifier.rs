use super::*;

/// Every record a ledger can publish to off-chain observers.
#[derive(Clone, Debug, PartialEq)]
pub enum LedgerEvent {
    Initialized(LedgerInitializedEvent),
    Minted(UnitsMintedEvent),
    Redeemed(UnitsRedeemedEvent),
    Transferred(UnitsTransferredEvent),
    Rebased(RebasedEvent),
    PriceUpdated(PriceUpdatedEvent),
    YieldRateUpdated(YieldRateUpdatedEvent),
    WhitelistUpdated(WhitelistUpdatedEvent),
    BlacklistUpdated(BlacklistUpdatedEvent),
    WhitelistEnforcementUpdated(WhitelistEnforcementUpdatedEvent),
    PauseUpdated(PauseUpdatedEvent),
}

/// Fire-and-forget sink. Nothing in the ledger reads back what it was given.
pub trait Notifier {
    fn notify(&mut self, event: LedgerEvent);
}

/// Publishes events as program log data.
pub struct ProgramLog;

impl Notifier for ProgramLog {
    fn notify(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::Initialized(e) => { emit!(e); }
            LedgerEvent::Minted(e) => { emit!(e); }
            LedgerEvent::Redeemed(e) => { emit!(e); }
            LedgerEvent::Transferred(e) => { emit!(e); }
            LedgerEvent::Rebased(e) => { emit!(e); }
            LedgerEvent::PriceUpdated(e) => { emit!(e); }
            LedgerEvent::YieldRateUpdated(e) => { emit!(e); }
            LedgerEvent::WhitelistUpdated(e) => { emit!(e); }
            LedgerEvent::BlacklistUpdated(e) => { emit!(e); }
            LedgerEvent::WhitelistEnforcementUpdated(e) => { emit!(e); }
            LedgerEvent::PauseUpdated(e) => { emit!(e); }
        }
    }
}

impl Notifier for Vec<LedgerEvent> {
    fn notify(&mut self, event: LedgerEvent) {
        self.push(event);
    }
}
