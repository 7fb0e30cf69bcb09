use anchor_lang::prelude::*;
#[cfg(test)]
use anchor_lang::error::Error;
use anchor_spl::token_interface::Mint;
use primitive_types::U256;
use static_assertions::const_assert_eq;

pub mod error;
pub mod instructions;
pub mod state;
pub mod events;
pub mod constants;
pub mod math;
pub mod helpers;

pub use error::{ErrorKind, LedgerError};
pub use instructions::*;
pub use state::*;
pub use events::*;
pub use constants::*;
pub use math::*;
pub use helpers::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "treasury_yield",
    project_url: "https://github.com/treasury-yield/treasury_yield",
    contacts: "email:security@treasury-yield.dev",
    policy: "Report vulnerabilities privately to the contact above.",
    source_code: "https://github.com/treasury-yield/treasury_yield",
    source_release: "v0.1.0"
}

declare_id!("7YLdgKz4WcJ8nq2rVf3N6pZ1hTmXsEaB5uQjHc9DwRkP");

#[program]
pub mod treasury_yield {
    use super::*;

    pub fn initialize_access_registry(
        ctx: Context<InitializeAccessRegistry>,
        grants: Vec<RoleGrant>,
    ) -> Result<()> {
        InitializeAccessRegistry::handler(ctx, grants)
    }

    pub fn initialize_price_oracle(ctx: Context<InitializePriceOracle>) -> Result<()> {
        InitializePriceOracle::handler(ctx)
    }

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, params: LedgerParams) -> Result<()> {
        InitializeLedger::handler(ctx, params)
    }

    pub fn open_holder(ctx: Context<OpenHolder>) -> Result<()> {
        OpenHolder::handler(ctx)
    }

    pub fn mint_units(ctx: Context<MintUnits>, external_amount: u64) -> Result<()> {
        MintUnits::handler(ctx, external_amount)
    }

    /// Returns the external value released.
    pub fn redeem_units(ctx: Context<RedeemUnits>, unit_amount: u64) -> Result<u64> {
        RedeemUnits::handler(ctx, unit_amount)
    }

    pub fn transfer_units(ctx: Context<TransferUnits>, amount: u64) -> Result<()> {
        TransferUnits::handler(ctx, amount)
    }

    pub fn set_yield_rate(ctx: Context<UpdateYieldRate>, rate_bps: u16) -> Result<()> {
        handle_update_yield_rate(ctx, rate_bps)
    }

    pub fn sync_yield(ctx: Context<SyncYield>) -> Result<u128> {
        SyncYield::handler(ctx)
    }

    pub fn set_whitelisted(ctx: Context<UpdateListing>, whitelisted: bool) -> Result<()> {
        UpdateListing::handler(ctx, Listing::Whitelist, whitelisted)
    }

    pub fn set_blacklisted(ctx: Context<UpdateListing>, blacklisted: bool) -> Result<()> {
        UpdateListing::handler(ctx, Listing::Blacklist, blacklisted)
    }

    pub fn set_whitelist_enforced(ctx: Context<UpdateLedgerFlags>, enforced: bool) -> Result<()> {
        handle_set_whitelist_enforced(ctx, enforced)
    }

    pub fn set_paused(ctx: Context<UpdateLedgerFlags>, paused: bool) -> Result<()> {
        handle_set_paused(ctx, paused)
    }

    pub fn balance_of(ctx: Context<HolderView>) -> Result<u64> {
        handle_balance_of(ctx)
    }

    pub fn scaled_balance_of(ctx: Context<HolderView>) -> Result<u64> {
        handle_scaled_balance_of(ctx)
    }

    pub fn value_of(ctx: Context<HolderView>) -> Result<u64> {
        handle_value_of(ctx)
    }

    pub fn total_supply(ctx: Context<LedgerView>) -> Result<u64> {
        handle_total_supply(ctx)
    }

    pub fn current_index(ctx: Context<LedgerView>) -> Result<u128> {
        handle_current_index(ctx)
    }

    pub fn get_price(ctx: Context<LedgerView>) -> Result<u128> {
        handle_get_price(ctx)
    }

    pub fn preview_exchange(
        ctx: Context<LedgerView>,
        args: PreviewExchangeArgs,
    ) -> Result<PreviewExchangeResult> {
        handle_preview_exchange(ctx, args)
    }
}
