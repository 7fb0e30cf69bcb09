use super::*;

/// Scaled-unit accounting. Holders store rebase-invariant scaled balances;
/// the visible balance is `scaled * index / SCALE`, and the index compounds
/// once per elapsed interval.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, InitSpace)]
pub struct RebasingBook {
    pub scaled_total_supply: u64,
    pub rebase_index: u128,
    pub last_rebase: i64,
    pub rebase_interval: i64,
}

/// Outcome of compounding up to `now`, not yet written to the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRebase {
    pub index: u128,
    pub last_rebase: i64,
    pub periods: u64,
}

impl RebasingBook {
    /// Compound every whole interval elapsed since `last_rebase`, at most
    /// `MAX_REBASE_PERIODS` of them. Intervals beyond the cap are skipped,
    /// not deferred: the schedule still advances past them.
    pub fn pending_rebase(&self, rate_bps: u16, now: i64) -> Result<PendingRebase> {
        require!(self.rebase_interval > 0, LedgerError::InvalidRebaseInterval);

        let interval = self.rebase_interval as u64;
        let elapsed = elapsed_seconds(self.last_rebase, now);
        if elapsed < interval {
            return Ok(PendingRebase {
                index: self.rebase_index,
                last_rebase: self.last_rebase,
                periods: 0,
            });
        }

        let due = elapsed / interval;
        let periods = due.min(MAX_REBASE_PERIODS);
        let multiplier = per_period_multiplier(rate_bps, self.rebase_interval)?;
        let index = compound(self.rebase_index, multiplier, periods)?;

        let due = i64::try_from(due).map_err(|_| error!(LedgerError::MathOverflow))?;
        let last_rebase = self.last_rebase.safe_add(due.safe_mul(self.rebase_interval)?)?;

        Ok(PendingRebase {
            index,
            last_rebase,
            periods,
        })
    }

    pub fn current_index(&self, rate_bps: u16, now: i64) -> Result<u128> {
        Ok(self.pending_rebase(rate_bps, now)?.index)
    }

    pub fn balance_of(&self, rate_bps: u16, holder: &Holder, now: i64) -> Result<u64> {
        calculate_nominal_amount(holder.balance, self.current_index(rate_bps, now)?)
    }

    pub fn total_supply(&self, rate_bps: u16, now: i64) -> Result<u64> {
        calculate_nominal_amount(self.scaled_total_supply, self.current_index(rate_bps, now)?)
    }

    pub fn rebase_if_needed(&mut self, state: &LedgerState, env: &mut LedgerEnv) -> Result<u128> {
        let pending = self.pending_rebase(state.yield_rate_bps, env.now)?;
        self.apply_rebase(pending, env);
        Ok(self.rebase_index)
    }

    fn apply_rebase(&mut self, pending: PendingRebase, env: &mut LedgerEnv) {
        if pending.periods == 0 {
            return;
        }

        let old_index = self.rebase_index;
        self.rebase_index = pending.index;
        self.last_rebase = pending.last_rebase;

        env.notify(LedgerEvent::Rebased(RebasedEvent {
            ledger: env.ledger,
            old_index,
            new_index: pending.index,
            periods: pending.periods,
            timestamp: env.now,
        }));
        msg!("Rebased {} periods: index {} -> {}", pending.periods, old_index, pending.index);
    }

    pub fn mint(
        &mut self,
        state: &LedgerState,
        env: &mut LedgerEnv,
        to: &mut Holder,
        external_amount: u64,
    ) -> Result<u64> {
        env.require(Capability::Mint)?;
        state.check_mint_amount(external_amount)?;
        let pending = self.pending_rebase(state.yield_rate_bps, env.now)?;
        state.gate(&env.ledger).can_mutate(None, Some(&to.party()))?;

        let scaled = calculate_scaled_amount(external_amount, pending.index)?;
        require!(scaled > 0, LedgerError::InvalidAmount);
        let units = calculate_nominal_amount(scaled, pending.index)?;

        let new_balance = to.balance.safe_add(scaled)?;
        let new_supply = self.scaled_total_supply.safe_add(scaled)?;

        self.apply_rebase(pending, env);
        to.balance = new_balance;
        self.scaled_total_supply = new_supply;

        env.notify(LedgerEvent::Minted(UnitsMintedEvent {
            ledger: env.ledger,
            to: to.owner,
            external_amount,
            units,
            scaled_units: scaled,
            conversion_rate: pending.index,
            timestamp: env.now,
        }));
        msg!("Minted {} units ({} scaled) to {}", units, scaled, to.owner);

        Ok(units)
    }

    pub fn redeem(
        &mut self,
        state: &LedgerState,
        env: &mut LedgerEnv,
        from: &mut Holder,
        unit_amount: u64,
    ) -> Result<u64> {
        env.require(Capability::Redeem)?;
        state.check_redeem_amount(unit_amount)?;
        let pending = self.pending_rebase(state.yield_rate_bps, env.now)?;
        state.gate(&env.ledger).can_mutate(Some(&from.party()), None)?;

        let balance = calculate_nominal_amount(from.balance, pending.index)?;
        require!(balance >= unit_amount, LedgerError::InsufficientBalance);

        let scaled = calculate_scaled_amount(unit_amount, pending.index)?;
        require!(scaled > 0, LedgerError::InvalidAmount);

        let new_balance = from.balance.safe_sub(scaled)?;
        let new_supply = self.scaled_total_supply.safe_sub(scaled)?;

        self.apply_rebase(pending, env);
        from.balance = new_balance;
        self.scaled_total_supply = new_supply;

        env.notify(LedgerEvent::Redeemed(UnitsRedeemedEvent {
            ledger: env.ledger,
            from: from.owner,
            units: unit_amount,
            scaled_units: scaled,
            external_amount: unit_amount,
            conversion_rate: pending.index,
            timestamp: env.now,
        }));
        msg!("Redeemed {} units ({} scaled) from {}", unit_amount, scaled, from.owner);

        Ok(unit_amount)
    }

    pub fn transfer(
        &mut self,
        state: &LedgerState,
        env: &mut LedgerEnv,
        from: &mut Holder,
        to: &mut Holder,
        amount: u64,
    ) -> Result<()> {
        let pending = self.pending_rebase(state.yield_rate_bps, env.now)?;
        state
            .gate(&env.ledger)
            .can_mutate(Some(&from.party()), Some(&to.party()))?;

        let balance = calculate_nominal_amount(from.balance, pending.index)?;
        require!(balance >= amount, LedgerError::InsufficientBalance);

        // Both sides move the same scaled amount, so scaled supply is conserved.
        let scaled = calculate_scaled_amount(amount, pending.index)?;
        require!(scaled > 0, LedgerError::InvalidAmount);

        let new_from = from.balance.safe_sub(scaled)?;
        let new_to = to.balance.safe_add(scaled)?;

        self.apply_rebase(pending, env);
        from.balance = new_from;
        to.balance = new_to;

        env.notify(LedgerEvent::Transferred(UnitsTransferredEvent {
            ledger: env.ledger,
            from: from.owner,
            to: to.owner,
            units: amount,
            scaled_units: scaled,
            timestamp: env.now,
        }));
        Ok(())
    }

    /// Commit what accrued at `old_rate_bps`, then hand the new rate to the
    /// price authority.
    pub fn set_yield_rate(
        &mut self,
        old_rate_bps: u16,
        env: &mut LedgerEnv,
        new_rate_bps: u16,
    ) -> Result<()> {
        let pending = self.pending_rebase(old_rate_bps, env.now)?;
        env.prices.set_rate(&env.ledger, new_rate_bps)?;
        self.apply_rebase(pending, env);
        Ok(())
    }
}
