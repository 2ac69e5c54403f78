//! Program constants for the staking program.
//!
//! PDA seeds are part of the on-chain interface: clients derive pool, vault
//! and user stake addresses from exactly these byte strings.

use anchor_lang::prelude::*;

/// Seed for deriving the staking pool PDA
#[constant]
pub const STAKING_POOL_SEED: &[u8] = b"staking_pool";

/// Seed for deriving the staking vault PDA
#[constant]
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Seed for deriving the reward vault PDA
#[constant]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Seed for deriving user stake account PDAs
#[constant]
pub const USER_STAKE_SEED: &[u8] = b"user_stake_account";

/// Fixed-point scale of `reward_rate` (rate / 10^9 reward tokens per staked token per second)
pub const REWARD_RATE_SCALE: u128 = 1_000_000_000;

/// Number of seconds in a year (365.25 days)
pub const SECONDS_PER_YEAR: u64 = 31_557_600;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;
