use super::*;

/// Fixed-unit accounting. Units never change once minted; their value is the
/// price read from the price authority.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, InitSpace)]
pub struct AppreciatingBook {
    pub total_supply: u64,
    pub last_yield_update: i64,
}

impl AppreciatingBook {
    pub fn mint(
        &mut self,
        state: &LedgerState,
        env: &mut LedgerEnv,
        to: &mut Holder,
        external_amount: u64,
    ) -> Result<u64> {
        env.require(Capability::Mint)?;
        state.check_mint_amount(external_amount)?;
        state.gate(&env.ledger).can_mutate(None, Some(&to.party()))?;

        let price = env.prices.get_price(&env.ledger)?;
        let units = calculate_unit_amount(external_amount, price)?;
        require!(units > 0, LedgerError::InvalidAmount);

        let new_balance = to.balance.safe_add(units)?;
        let new_supply = self.total_supply.safe_add(units)?;

        to.balance = new_balance;
        self.total_supply = new_supply;

        env.notify(LedgerEvent::Minted(UnitsMintedEvent {
            ledger: env.ledger,
            to: to.owner,
            external_amount,
            units,
            scaled_units: units,
            conversion_rate: price,
            timestamp: env.now,
        }));
        msg!("Minted {} units to {} at price {}", units, to.owner, price);

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
        state.gate(&env.ledger).can_mutate(Some(&from.party()), None)?;
        require!(from.balance >= unit_amount, LedgerError::InsufficientBalance);

        let price = env.prices.get_price(&env.ledger)?;
        // Informational: the payout itself settles off-ledger.
        let external_amount = calculate_external_amount(unit_amount, price)?;

        let new_balance = from.balance.safe_sub(unit_amount)?;
        let new_supply = self.total_supply.safe_sub(unit_amount)?;

        from.balance = new_balance;
        self.total_supply = new_supply;

        env.notify(LedgerEvent::Redeemed(UnitsRedeemedEvent {
            ledger: env.ledger,
            from: from.owner,
            units: unit_amount,
            scaled_units: unit_amount,
            external_amount,
            conversion_rate: price,
            timestamp: env.now,
        }));
        msg!("Redeemed {} units from {} for {}", unit_amount, from.owner, external_amount);

        Ok(external_amount)
    }

    pub fn transfer(
        &mut self,
        state: &LedgerState,
        env: &mut LedgerEnv,
        from: &mut Holder,
        to: &mut Holder,
        amount: u64,
    ) -> Result<()> {
        state
            .gate(&env.ledger)
            .can_mutate(Some(&from.party()), Some(&to.party()))?;
        require!(from.balance >= amount, LedgerError::InsufficientBalance);

        let new_from = from.balance.safe_sub(amount)?;
        let new_to = to.balance.safe_add(amount)?;

        from.balance = new_from;
        to.balance = new_to;

        env.notify(LedgerEvent::Transferred(UnitsTransferredEvent {
            ledger: env.ledger,
            from: from.owner,
            to: to.owner,
            units: amount,
            scaled_units: amount,
            timestamp: env.now,
        }));
        Ok(())
    }

    /// Forward a new rate to the price authority and restart the accrual
    /// clock. The price itself is untouched until the next `update_price`.
    pub fn set_yield_rate(&mut self, env: &mut LedgerEnv, new_rate_bps: u16) -> Result<()> {
        env.prices.set_rate(&env.ledger, new_rate_bps)?;
        self.last_yield_update = env.now;
        Ok(())
    }

    /// Accrue simple interest on the price since the last update and write it
    /// back. Must be driven by an external keeper.
    pub fn update_price(&mut self, state: &LedgerState, env: &mut LedgerEnv) -> Result<u128> {
        env.require(Capability::RateSet)?;

        let old_price = env.prices.get_price(&env.ledger)?;
        let elapsed = elapsed_seconds(self.last_yield_update, env.now);
        if elapsed == 0 {
            return Ok(old_price);
        }

        let accrual = linear_accrual(old_price, state.yield_rate_bps, elapsed)?;
        let new_price = old_price.safe_add(accrual)?;

        env.prices.set_price(&env.ledger, new_price)?;
        self.last_yield_update = env.now;

        env.notify(LedgerEvent::PriceUpdated(PriceUpdatedEvent {
            ledger: env.ledger,
            old_price,
            new_price,
            elapsed,
            timestamp: env.now,
        }));
        msg!("Price {} -> {} over {}s", old_price, new_price, elapsed);

        Ok(new_price)
    }
}
