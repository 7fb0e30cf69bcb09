#![allow(dead_code)]

use anchor_lang::prelude::*;
use ::treasury_yield::*;

pub const START: i64 = 1_700_000_000;
pub const DAY: i64 = DEFAULT_REBASE_INTERVAL;
pub const YEAR: i64 = SECONDS_PER_YEAR as i64;

/// In-memory stand-ins for the accounts a ledger talks to.
pub struct World {
    pub admin: Pubkey,
    pub ledger_key: Pubkey,
    pub registry: AccessRegistry,
    pub oracle: PriceOracle,
    pub events: Vec<LedgerEvent>,
}

impl World {
    pub fn new(grants: Vec<RoleGrant>) -> Self {
        let admin = Pubkey::new_unique();
        let mut registry = AccessRegistry::default();
        registry.initialize(admin, 255, grants).unwrap();
        let mut oracle = PriceOracle::default();
        oracle.initialize(admin, 254).unwrap();

        Self {
            admin,
            ledger_key: Pubkey::new_unique(),
            registry,
            oracle,
            events: Vec::new(),
        }
    }

    pub fn env(&mut self, caller: Pubkey, now: i64) -> LedgerEnv<'_> {
        LedgerEnv {
            ledger: self.ledger_key,
            caller,
            now,
            access: &self.registry,
            prices: &mut self.oracle,
            notifier: &mut self.events,
        }
    }

    pub fn admin_env(&mut self, now: i64) -> LedgerEnv<'_> {
        let admin = self.admin;
        self.env(admin, now)
    }

    pub fn create_ledger(&mut self, params: LedgerParams) -> Ledger {
        self.oracle
            .register_feed(self.ledger_key, params.initial_price(), params.yield_rate_bps)
            .unwrap();
        let bindings = LedgerBindings {
            authority: self.admin,
            external_asset: Pubkey::new_unique(),
            external_decimals: 6,
            price_authority: Pubkey::new_unique(),
            access_registry: Pubkey::new_unique(),
        };
        let mut env = self.admin_env(START);
        Ledger::create(253, bindings, &params, &mut env).unwrap()
    }

    pub fn holder(&self, whitelisted: bool) -> Holder {
        let mut holder = Holder::default();
        holder
            .initialize(self.ledger_key, Pubkey::new_unique(), 250)
            .unwrap();
        holder.whitelisted = whitelisted;
        holder
    }

    pub fn price(&self) -> u128 {
        self.oracle.get_price(&self.ledger_key).unwrap()
    }
}

pub fn params(strategy: StrategyKind) -> LedgerParams {
    LedgerParams {
        strategy,
        initial_price: None,
        yield_rate_bps: 400,
        min_mint_amount: 1_000_000,
        min_redeem_amount: 1,
        whitelist_enforced: true,
        rebase_interval: None,
    }
}
