use super::*;

/// Seconds between `from` and `to`, zero if the clock went backwards.
pub fn elapsed_seconds(from: i64, to: i64) -> u64 {
    if to <= from {
        return 0;
    }
    (to as i128 - from as i128) as u64
}

/// Simple (non-compounding) accrual on a price over `elapsed` seconds:
/// `price * rate_bps * elapsed / (10000 * SECONDS_PER_YEAR)`, floored.
pub fn linear_accrual(price: u128, rate_bps: u16, elapsed: u64) -> Result<u128> {
    let rate_time = (rate_bps as u128).safe_mul(elapsed as u128)?;
    let denominator = ONE_IN_BASIS_POINTS.safe_mul(SECONDS_PER_YEAR as u128)?;

    mul_div_floor(price, rate_time, denominator)
}

/// Growth factor for one rebase interval, in `SCALE` fixed point.
pub fn per_period_multiplier(rate_bps: u16, interval: i64) -> Result<u128> {
    require!(interval > 0, LedgerError::InvalidRebaseInterval);

    let rate_time = (rate_bps as u128).safe_mul(interval as u128)?;
    let denominator = ONE_IN_BASIS_POINTS.safe_mul(SECONDS_PER_YEAR as u128)?;
    let growth = mul_div_floor(SCALE, rate_time, denominator)?;

    SCALE.safe_add(growth)
}

/// Apply `multiplier` to `index` once per period, flooring after each step.
pub fn compound(index: u128, multiplier: u128, periods: u64) -> Result<u128> {
    let mut result = index;
    for _ in 0..periods {
        result = wad_mul(result, multiplier)?;
    }
    Ok(result)
}
