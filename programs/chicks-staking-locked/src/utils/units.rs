//! Conversions from operator-facing units to the integers the program stores.

use crate::constants::{BASIS_POINTS_PER_PERCENT, LOCK_DAYS_THRESHOLD, MAX_DECIMALS, SECONDS_PER_DAY};
use crate::error::StakingClientError;

/// APR percentage -> reward rate in basis points, rounded to the nearest unit
pub fn apr_to_reward_rate(apr: f64) -> Result<u64, StakingClientError> {
    if !apr.is_finite() || apr < 0.0 {
        return Err(StakingClientError::InvalidApr(apr));
    }
    let rate = (apr * BASIS_POINTS_PER_PERCENT).round();
    if rate >= u64::MAX as f64 {
        return Err(StakingClientError::RewardRateOverflow(apr));
    }
    Ok(rate as u64)
}

/// Reward rate in basis points -> APR percentage
pub fn reward_rate_to_apr(reward_rate: u64) -> f64 {
    reward_rate as f64 / BASIS_POINTS_PER_PERCENT
}

/// Lock duration in seconds
///
/// Values below 10 000 are read as days, larger values are already seconds.
pub fn lock_to_seconds(lock: u64) -> u64 {
    if lock < LOCK_DAYS_THRESHOLD {
        lock * SECONDS_PER_DAY
    } else {
        lock
    }
}

/// Whole token amount -> base units for a mint with `decimals`
pub fn to_base_units(amount: u64, decimals: u8) -> Result<u64, StakingClientError> {
    if decimals > MAX_DECIMALS {
        return Err(StakingClientError::InvalidDecimals(decimals));
    }
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| amount.checked_mul(scale))
        .ok_or(StakingClientError::AmountOverflow { amount, decimals })
}

/// Base units -> whole tokens, for display
pub fn to_ui_amount(base_units: u64, decimals: u8) -> f64 {
    base_units as f64 / 10f64.powi(decimals as i32)
}
