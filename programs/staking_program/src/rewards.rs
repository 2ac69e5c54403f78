//! Reward rate conversion and accrual math.
//!
//! Rates are fixed-point integers at scale [`REWARD_RATE_SCALE`]: a rate of
//! `r` accrues `r / 10^9` reward tokens per staked token per second. All
//! accrual is multiply-then-floor-divide in u128 so truncation matches
//! existing deployments exactly.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// Convert an APY in basis points (1000 = 10%) to a per-second rate.
///
/// `rate = floor(apy_bps * 10^9 / (10_000 * SECONDS_PER_YEAR))`, the exact
/// integer form of `floor((apy / 100) / SECONDS_PER_YEAR * 10^9)`.
pub fn apy_bps_to_rate(apy_bps: u32) -> Result<u64> {
    let numerator = (apy_bps as u128)
        .checked_mul(REWARD_RATE_SCALE)
        .ok_or(StakingError::MathOverflow)?;
    let denominator = (BASIS_POINTS_DENOMINATOR as u128)
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or(StakingError::MathOverflow)?;

    let rate = numerator
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(rate).map_err(|_| StakingError::MathOverflow.into())
}

/// Convert a per-second rate back to an APY in basis points (floored).
///
/// Lossy: `rate_to_apy_bps(apy_bps_to_rate(x)?)` is generally below `x`.
pub fn rate_to_apy_bps(rate: u64) -> Result<u64> {
    let apy = (rate as u128)
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(BASIS_POINTS_DENOMINATOR as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(REWARD_RATE_SCALE)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(apy).map_err(|_| StakingError::MathOverflow.into())
}

/// Float form of [`apy_bps_to_rate`] for clients that hold a percentage.
pub fn apy_to_rate(apy_percent: f64) -> u64 {
    let per_second = (apy_percent / 100.0) / SECONDS_PER_YEAR as f64;
    (per_second * REWARD_RATE_SCALE as f64).floor() as u64
}

/// Float inverse of [`apy_to_rate`], in percent.
pub fn rate_to_apy(rate: u64) -> f64 {
    let per_second = rate as f64 / REWARD_RATE_SCALE as f64;
    per_second * SECONDS_PER_YEAR as f64 * 100.0
}

/// Seconds between the checkpoint and `now`, zero if the clock went backwards.
pub fn elapsed_seconds(checkpoint: i64, now: i64) -> u64 {
    now.saturating_sub(checkpoint).max(0) as u64
}

/// Rewards earned by `deposited` tokens over `elapsed` seconds.
///
/// `floor(deposited * rate * elapsed / 10^9)`
pub fn accrued_rewards(deposited: u64, reward_rate: u64, elapsed: u64) -> Result<u64> {
    if deposited == 0 || reward_rate == 0 || elapsed == 0 {
        return Ok(0);
    }

    let reward = (deposited as u128)
        .checked_mul(reward_rate as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(REWARD_RATE_SCALE)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(reward).map_err(|_| StakingError::MathOverflow.into())
}
