use super::*;

/// Configuration and compliance state shared by both accounting strategies.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace, Debug, PartialEq)]
pub struct LedgerState {
    pub external_asset: Pubkey,    // Mint of the unit of external value
    pub external_decimals: u8,
    pub price_authority: Pubkey,   // PriceOracle account
    pub access_registry: Pubkey,   // AccessRegistry account
    pub yield_rate_bps: u16,       // Annualized, <= 10000
    pub min_mint_amount: u64,      // In external value
    pub min_redeem_amount: u64,    // In units
    pub whitelist_enforced: bool,
    pub paused: bool,
}

impl LedgerState {
    pub fn gate<'a>(&'a self, reserved: &'a Pubkey) -> ComplianceGate<'a> {
        ComplianceGate::new(self, reserved)
    }

    pub fn check_mint_amount(&self, external_amount: u64) -> Result<()> {
        require!(external_amount > 0, LedgerError::InvalidAmount);
        require!(
            external_amount >= self.min_mint_amount,
            LedgerError::AmountBelowMinimum
        );
        Ok(())
    }

    pub fn check_redeem_amount(&self, unit_amount: u64) -> Result<()> {
        require!(unit_amount > 0, LedgerError::InvalidAmount);
        require!(
            unit_amount >= self.min_redeem_amount,
            LedgerError::AmountBelowMinimum
        );
        Ok(())
    }
}

pub fn validate_yield_rate(rate_bps: u16) -> Result<()> {
    require!(rate_bps <= BASIS_POINT_MAX, LedgerError::InvalidYieldRate);
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum StrategyKind {
    Appreciating, // Fixed units, rising price
    Rebasing,     // Price pinned near one, rising balances
}

impl StrategyKind {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            StrategyKind::Appreciating => b"appreciating",
            StrategyKind::Rebasing => b"rebasing",
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct LedgerParams {
    pub strategy: StrategyKind,
    pub initial_price: Option<u128>,
    pub yield_rate_bps: u16,
    pub min_mint_amount: u64,
    pub min_redeem_amount: u64,
    pub whitelist_enforced: bool,
    pub rebase_interval: Option<i64>,
}

impl LedgerParams {
    pub fn validate(&self) -> Result<()> {
        validate_yield_rate(self.yield_rate_bps)?;
        require!(self.initial_price() > 0, LedgerError::InvalidPrice);
        require!(self.rebase_interval() > 0, LedgerError::InvalidRebaseInterval);
        Ok(())
    }

    pub fn initial_price(&self) -> u128 {
        self.initial_price.unwrap_or(SCALE)
    }

    pub fn rebase_interval(&self) -> i64 {
        self.rebase_interval.unwrap_or(DEFAULT_REBASE_INTERVAL)
    }
}

/// Collaborator accounts a ledger is bound to at creation.
#[derive(Clone, Copy, Debug)]
pub struct LedgerBindings {
    pub authority: Pubkey,
    pub external_asset: Pubkey,
    pub external_decimals: u8,
    pub price_authority: Pubkey,
    pub access_registry: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, InitSpace)]
pub enum Strategy {
    Appreciating(AppreciatingBook),
    Rebasing(RebasingBook),
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PreviewExchangeArgs {
    pub external_amount: Option<u64>,
    pub unit_amount: Option<u64>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PreviewExchangeResult {
    pub external_amount: u64,
    pub unit_amount: u64,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct Ledger {
    pub bump: u8,
    pub authority: Pubkey,
    pub state: LedgerState,
    pub strategy: Strategy,
}

impl Ledger {
    /// Build a fresh ledger. Its price feed must already be registered under
    /// `env.ledger`.
    pub fn create(
        bump: u8,
        bindings: LedgerBindings,
        params: &LedgerParams,
        env: &mut LedgerEnv,
    ) -> Result<Self> {
        params.validate()?;

        let state = LedgerState {
            external_asset: bindings.external_asset,
            external_decimals: bindings.external_decimals,
            price_authority: bindings.price_authority,
            access_registry: bindings.access_registry,
            yield_rate_bps: params.yield_rate_bps,
            min_mint_amount: params.min_mint_amount,
            min_redeem_amount: params.min_redeem_amount,
            whitelist_enforced: params.whitelist_enforced,
            paused: false,
        };

        let strategy = match params.strategy {
            StrategyKind::Appreciating => Strategy::Appreciating(AppreciatingBook {
                total_supply: 0,
                last_yield_update: env.now,
            }),
            StrategyKind::Rebasing => Strategy::Rebasing(RebasingBook {
                scaled_total_supply: 0,
                rebase_index: SCALE,
                last_rebase: env.now,
                rebase_interval: params.rebase_interval(),
            }),
        };

        let price = env.prices.get_price(&env.ledger)?;

        env.notify(LedgerEvent::Initialized(LedgerInitializedEvent {
            ledger: env.ledger,
            authority: bindings.authority,
            external_asset: bindings.external_asset,
            strategy: params.strategy,
            initial_price: price,
            yield_rate_bps: params.yield_rate_bps,
            min_mint_amount: params.min_mint_amount,
            min_redeem_amount: params.min_redeem_amount,
            rebase_interval: match params.strategy {
                StrategyKind::Appreciating => 0,
                StrategyKind::Rebasing => params.rebase_interval(),
            },
            timestamp: env.now,
        }));

        Ok(Self {
            bump,
            authority: bindings.authority,
            state,
            strategy,
        })
    }

    pub fn kind(&self) -> StrategyKind {
        match self.strategy {
            Strategy::Appreciating(_) => StrategyKind::Appreciating,
            Strategy::Rebasing(_) => StrategyKind::Rebasing,
        }
    }

    pub fn appreciating(&self) -> Result<&AppreciatingBook> {
        match &self.strategy {
            Strategy::Appreciating(book) => Ok(book),
            Strategy::Rebasing(_) => err!(LedgerError::StrategyMismatch),
        }
    }

    pub fn rebasing(&self) -> Result<&RebasingBook> {
        match &self.strategy {
            Strategy::Rebasing(book) => Ok(book),
            Strategy::Appreciating(_) => err!(LedgerError::StrategyMismatch),
        }
    }

    // Balance-moving operations

    /// Returns the units credited to `to`.
    pub fn mint(&mut self, env: &mut LedgerEnv, to: &mut Holder, external_amount: u64) -> Result<u64> {
        to.check_ledger(&env.ledger)?;
        match &mut self.strategy {
            Strategy::Appreciating(book) => book.mint(&self.state, env, to, external_amount),
            Strategy::Rebasing(book) => book.mint(&self.state, env, to, external_amount),
        }
    }

    /// Returns the external value released for `unit_amount`.
    pub fn redeem(&mut self, env: &mut LedgerEnv, from: &mut Holder, unit_amount: u64) -> Result<u64> {
        from.check_ledger(&env.ledger)?;
        match &mut self.strategy {
            Strategy::Appreciating(book) => book.redeem(&self.state, env, from, unit_amount),
            Strategy::Rebasing(book) => book.redeem(&self.state, env, from, unit_amount),
        }
    }

    pub fn transfer(
        &mut self,
        env: &mut LedgerEnv,
        from: &mut Holder,
        to: &mut Holder,
        amount: u64,
    ) -> Result<()> {
        from.check_ledger(&env.ledger)?;
        to.check_ledger(&env.ledger)?;
        require_keys_eq!(env.caller, from.owner, LedgerError::Unauthorized);
        require_keys_neq!(from.owner, to.owner, LedgerError::SelfTransfer);
        require!(amount > 0, LedgerError::InvalidAmount);

        match &mut self.strategy {
            Strategy::Appreciating(book) => book.transfer(&self.state, env, from, to, amount),
            Strategy::Rebasing(book) => book.transfer(&self.state, env, from, to, amount),
        }
    }

    // Yield

    pub fn set_yield_rate(&mut self, env: &mut LedgerEnv, new_rate_bps: u16) -> Result<()> {
        env.require(Capability::RateSet)?;
        validate_yield_rate(new_rate_bps)?;

        let old_rate = self.state.yield_rate_bps;
        match &mut self.strategy {
            Strategy::Appreciating(book) => book.set_yield_rate(env, new_rate_bps)?,
            Strategy::Rebasing(book) => book.set_yield_rate(old_rate, env, new_rate_bps)?,
        }
        self.state.yield_rate_bps = new_rate_bps;

        env.notify(LedgerEvent::YieldRateUpdated(YieldRateUpdatedEvent {
            ledger: env.ledger,
            old_rate,
            new_rate: new_rate_bps,
            timestamp: env.now,
        }));
        msg!("Yield rate {} -> {} bps", old_rate, new_rate_bps);
        Ok(())
    }

    /// Advance the yield mechanism: recompute the price of an appreciating
    /// ledger, or commit due rebases of a rebasing one. Returns the resulting
    /// price or index.
    pub fn sync_yield(&mut self, env: &mut LedgerEnv) -> Result<u128> {
        match &mut self.strategy {
            Strategy::Appreciating(book) => book.update_price(&self.state, env),
            Strategy::Rebasing(book) => book.rebase_if_needed(&self.state, env),
        }
    }

    // Administration

    pub fn set_whitelisted(&self, env: &mut LedgerEnv, holder: &mut Holder, whitelisted: bool) -> Result<()> {
        env.require(Capability::ListAdmin)?;
        holder.check_ledger(&env.ledger)?;

        holder.whitelisted = whitelisted;

        env.notify(LedgerEvent::WhitelistUpdated(WhitelistUpdatedEvent {
            ledger: env.ledger,
            principal: holder.owner,
            whitelisted,
            timestamp: env.now,
        }));
        Ok(())
    }

    pub fn set_blacklisted(&self, env: &mut LedgerEnv, holder: &mut Holder, blacklisted: bool) -> Result<()> {
        env.require(Capability::ListAdmin)?;
        holder.check_ledger(&env.ledger)?;

        holder.blacklisted = blacklisted;

        env.notify(LedgerEvent::BlacklistUpdated(BlacklistUpdatedEvent {
            ledger: env.ledger,
            principal: holder.owner,
            blacklisted,
            timestamp: env.now,
        }));
        Ok(())
    }

    pub fn set_whitelist_enforced(&mut self, env: &mut LedgerEnv, enforced: bool) -> Result<()> {
        env.require(Capability::ListAdmin)?;

        self.state.whitelist_enforced = enforced;

        env.notify(LedgerEvent::WhitelistEnforcementUpdated(
            WhitelistEnforcementUpdatedEvent {
                ledger: env.ledger,
                enforced,
                timestamp: env.now,
            },
        ));
        Ok(())
    }

    pub fn set_paused(&mut self, env: &mut LedgerEnv, paused: bool) -> Result<()> {
        env.require(Capability::Pause)?;

        self.state.paused = paused;

        env.notify(LedgerEvent::PauseUpdated(PauseUpdatedEvent {
            ledger: env.ledger,
            paused,
            timestamp: env.now,
        }));
        Ok(())
    }

    // Views

    pub fn balance_of(&self, holder: &Holder, now: i64) -> Result<u64> {
        match &self.strategy {
            Strategy::Appreciating(_) => Ok(holder.balance),
            Strategy::Rebasing(book) => book.balance_of(self.state.yield_rate_bps, holder, now),
        }
    }

    pub fn total_supply(&self, now: i64) -> Result<u64> {
        match &self.strategy {
            Strategy::Appreciating(book) => Ok(book.total_supply),
            Strategy::Rebasing(book) => book.total_supply(self.state.yield_rate_bps, now),
        }
    }

    /// Rebase index including pending periods; `SCALE` for appreciating ledgers.
    pub fn current_index(&self, now: i64) -> Result<u128> {
        match &self.strategy {
            Strategy::Appreciating(_) => Ok(SCALE),
            Strategy::Rebasing(book) => book.current_index(self.state.yield_rate_bps, now),
        }
    }

    /// External value of a holding at the current price or index.
    pub fn value_of(
        &self,
        prices: &dyn PriceAuthority,
        ledger: &Pubkey,
        holder: &Holder,
        now: i64,
    ) -> Result<u64> {
        match &self.strategy {
            Strategy::Appreciating(_) => {
                calculate_external_amount(holder.balance, prices.get_price(ledger)?)
            }
            Strategy::Rebasing(_) => self.balance_of(holder, now),
        }
    }

    /// The conversion mint or redeem would apply right now.
    pub fn preview_exchange(
        &self,
        prices: &dyn PriceAuthority,
        ledger: &Pubkey,
        now: i64,
        args: PreviewExchangeArgs,
    ) -> Result<PreviewExchangeResult> {
        match (args.external_amount, args.unit_amount) {
            (Some(external_amount), None) => {
                let unit_amount = match &self.strategy {
                    Strategy::Appreciating(_) => {
                        calculate_unit_amount(external_amount, prices.get_price(ledger)?)?
                    }
                    Strategy::Rebasing(book) => {
                        let index = book.current_index(self.state.yield_rate_bps, now)?;
                        let scaled = calculate_scaled_amount(external_amount, index)?;
                        calculate_nominal_amount(scaled, index)?
                    }
                };
                Ok(PreviewExchangeResult {
                    external_amount,
                    unit_amount,
                })
            }
            (None, Some(unit_amount)) => {
                let external_amount = match &self.strategy {
                    Strategy::Appreciating(_) => {
                        calculate_external_amount(unit_amount, prices.get_price(ledger)?)?
                    }
                    Strategy::Rebasing(_) => unit_amount,
                };
                Ok(PreviewExchangeResult {
                    external_amount,
                    unit_amount,
                })
            }
            _ => err!(LedgerError::InvalidPreviewInput),
        }
    }
}
