use super::*;

/// Floor of `a * b / denominator`, multiplied out in 256 bits so the
/// intermediate product never truncates.
pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator != 0, LedgerError::DivisionByZero);

    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(LedgerError::MathOverflow)?;

    narrow(product / U256::from(denominator))
}

/// `a * b / SCALE`, floored.
pub fn wad_mul(a: u128, b: u128) -> Result<u128> {
    mul_div_floor(a, b, SCALE)
}

/// `a * SCALE / b`, floored.
pub fn wad_div(a: u128, b: u128) -> Result<u128> {
    mul_div_floor(a, SCALE, b)
}

/// Narrow a 256-bit intermediate back to u128, failing instead of truncating.
pub fn narrow(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(LedgerError::MathOverflow.into());
    }
    Ok(value.as_u128())
}

/// Narrow to a token amount.
pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(LedgerError::MathOverflow))
}
