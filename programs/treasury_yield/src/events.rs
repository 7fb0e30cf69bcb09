use super::*;

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct AccessRegistryInitializedEvent {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub grants: u8,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceOracleInitializedEvent {
    pub oracle: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerInitializedEvent {
    pub ledger: Pubkey,
    pub authority: Pubkey,
    pub external_asset: Pubkey,
    pub strategy: StrategyKind,
    pub initial_price: u128,
    pub yield_rate_bps: u16,
    pub min_mint_amount: u64,
    pub min_redeem_amount: u64,
    pub rebase_interval: i64, // zero for appreciating ledgers
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct HolderOpenedEvent {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct UnitsMintedEvent {
    pub ledger: Pubkey,
    pub to: Pubkey,
    pub external_amount: u64,
    pub units: u64,
    pub scaled_units: u64,
    /// Price for appreciating ledgers, rebase index for rebasing ones.
    pub conversion_rate: u128,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct UnitsRedeemedEvent {
    pub ledger: Pubkey,
    pub from: Pubkey,
    pub units: u64,
    pub scaled_units: u64,
    pub external_amount: u64,
    pub conversion_rate: u128,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct UnitsTransferredEvent {
    pub ledger: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub units: u64,
    pub scaled_units: u64,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct RebasedEvent {
    pub ledger: Pubkey,
    pub old_index: u128,
    pub new_index: u128,
    pub periods: u64,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceUpdatedEvent {
    pub ledger: Pubkey,
    pub old_price: u128,
    pub new_price: u128,
    pub elapsed: u64,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct YieldRateUpdatedEvent {
    pub ledger: Pubkey,
    pub old_rate: u16,
    pub new_rate: u16,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct WhitelistUpdatedEvent {
    pub ledger: Pubkey,
    pub principal: Pubkey,
    pub whitelisted: bool,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct BlacklistUpdatedEvent {
    pub ledger: Pubkey,
    pub principal: Pubkey,
    pub blacklisted: bool,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct WhitelistEnforcementUpdatedEvent {
    pub ledger: Pubkey,
    pub enforced: bool,
    pub timestamp: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct PauseUpdatedEvent {
    pub ledger: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
