use super::*;

/// Units minted for `external_amount` at `price` (external value per unit):
/// `external_amount * SCALE / price`, floored.
pub fn calculate_unit_amount(external_amount: u64, price: u128) -> Result<u64> {
    require!(price > 0, LedgerError::InvalidPrice);
    to_u64(wad_div(external_amount as u128, price)?)
}

/// External value of `unit_amount` at `price`: `unit_amount * price / SCALE`, floored.
pub fn calculate_external_amount(unit_amount: u64, price: u128) -> Result<u64> {
    to_u64(wad_mul(unit_amount as u128, price)?)
}

/// Rebase-invariant storage amount for a nominal amount at `index`.
pub fn calculate_scaled_amount(nominal_amount: u64, index: u128) -> Result<u64> {
    require!(index > 0, LedgerError::InvalidPrice);
    to_u64(wad_div(nominal_amount as u128, index)?)
}

/// Nominal (externally visible) amount for scaled storage at `index`.
pub fn calculate_nominal_amount(scaled_amount: u64, index: u128) -> Result<u64> {
    to_u64(wad_mul(scaled_amount as u128, index)?)
}
