//! State transitions behind the pool, stake, unstake and claim instructions.
//!
//! Each function reads immutable snapshots of the pool and the caller's stake
//! record and returns the records to commit plus the token amount to move.
//! Nothing is written on error; handlers perform the token CPI and then
//! commit both records, so a failed transfer discards the whole transition.
//!
//! Every transition reconciles rewards before touching `deposited_amount`.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::rewards::apy_bps_to_rate;
use crate::state::{StakingPool, UserStake};

/// Records to commit after a successful token transfer of `amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub pool: StakingPool,
    pub user_stake: UserStake,
    pub amount: u64,
}

/// Keys and bumps fixed when a pool is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub bump: u8,
    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
}

/// Build a new pool over `existing`, the account found at the pool PDA.
///
/// The reward rate is derived from `apy_bps` once and never changes.
pub fn initialize_pool(
    existing: &StakingPool,
    config: PoolConfig,
    apy_bps: u32,
    now: i64,
) -> Result<StakingPool> {
    require!(!existing.is_initialized(), StakingError::AlreadyInitialized);
    require_keys_neq!(
        config.staking_mint,
        config.reward_mint,
        StakingError::IdenticalMints
    );

    Ok(StakingPool {
        authority: config.authority,
        staking_mint: config.staking_mint,
        reward_mint: config.reward_mint,
        staking_vault: config.staking_vault,
        reward_vault: config.reward_vault,
        reward_rate: apy_bps_to_rate(apy_bps)?,
        apy_bps,
        total_staked: 0,
        total_rewards_distributed: 0,
        staker_count: 0,
        created_at: now,
        bump: config.bump,
        staking_vault_bump: config.staking_vault_bump,
        reward_vault_bump: config.reward_vault_bump,
    })
}

/// Deposit `amount` staking tokens for `user`.
///
/// An uninitialized `user_stake` is opened at `now` with zero balances, so the
/// first deposit accrues nothing for time before it arrived.
pub fn stake(
    pool: &StakingPool,
    pool_key: Pubkey,
    user_stake: &UserStake,
    user: Pubkey,
    user_stake_bump: u8,
    amount: u64,
    now: i64,
) -> Result<Transition> {
    require!(amount > 0, StakingError::InvalidAmount);

    let current = if user_stake.is_initialized() {
        require_keys_eq!(user_stake.owner, user, StakingError::Unauthorized);
        require_keys_eq!(user_stake.staking_pool, pool_key, StakingError::StakePoolMismatch);
        user_stake.clone()
    } else {
        UserStake::open(user, pool_key, user_stake_bump, now)
    };

    let mut next_stake = current.reconcile(pool.reward_rate, now)?;
    let mut next_pool = pool.clone();

    if next_stake.deposited_amount == 0 {
        next_pool.staker_count = next_pool.staker_count.saturating_add(1);
    }
    next_stake.deposit(amount)?;
    next_pool.record_deposit(amount)?;

    Ok(Transition {
        pool: next_pool,
        user_stake: next_stake,
        amount,
    })
}

/// Withdraw `amount` staking tokens back to the stake owner.
pub fn unstake(
    pool: &StakingPool,
    user_stake: &UserStake,
    amount: u64,
    now: i64,
) -> Result<Transition> {
    require!(amount > 0, StakingError::InvalidAmount);

    let mut next_stake = user_stake.reconcile(pool.reward_rate, now)?;
    let mut next_pool = pool.clone();

    next_stake.withdraw(amount)?;
    next_pool.record_withdrawal(amount)?;
    if next_stake.deposited_amount == 0 {
        next_pool.staker_count = next_pool.staker_count.saturating_sub(1);
    }

    Ok(Transition {
        pool: next_pool,
        user_stake: next_stake,
        amount,
    })
}

/// Pay out everything accrued, all or nothing.
///
/// `reward_vault_balance` is the vault's current token balance; a vault that
/// cannot cover the full amount rejects the claim instead of paying part.
pub fn claim(
    pool: &StakingPool,
    user_stake: &UserStake,
    reward_vault_balance: u64,
    now: i64,
) -> Result<Transition> {
    let mut next_stake = user_stake.reconcile(pool.reward_rate, now)?;
    require!(
        next_stake.accumulated_rewards > 0,
        StakingError::NoRewardsToClaim
    );
    require!(
        reward_vault_balance >= next_stake.accumulated_rewards,
        StakingError::InsufficientRewardVault
    );

    let amount = next_stake.take_rewards()?;
    let mut next_pool = pool.clone();
    next_pool.record_reward_payout(amount)?;

    Ok(Transition {
        pool: next_pool,
        user_stake: next_stake,
        amount,
    })
}
