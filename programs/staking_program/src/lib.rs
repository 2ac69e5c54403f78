//! # Staking Program
//!
//! A two-token staking pool. Users deposit a staking token into a pool vault
//! and accrue a reward token at a fixed per-second rate chosen by the pool
//! authority at creation.
//!
//! ## Features
//! - One pool per (authority, staking mint, reward mint) triple
//! - Lazy reward accrual: every stake, unstake and claim first settles the
//!   caller's rewards on the balance held since the last checkpoint
//! - Fixed-point rates at scale 10^9, floor rounding
//! - All-or-nothing claims from a pre-funded reward vault

use anchor_lang::prelude::*;

declare_id!("3se3ZwCRzi9NS6b7uxaQry9fkqC7vhFf2VKfuw6oJ77T");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod rewards;
pub mod state;

use instructions::*;

#[program]
pub mod staking_program {
    use super::*;

    /// Creates the staking pool and its staking and reward vaults.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `apy_bps` - Annual yield in basis points (e.g., 1000 = 10%)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pool already exists
    /// - Staking and reward mints are identical
    pub fn initialize_pool(ctx: Context<InitializePool>, apy_bps: u32) -> Result<()> {
        instructions::initialize_pool::handler(ctx, apy_bps)
    }

    /// Stakes tokens into the pool, creating the user's stake record on first use.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Insufficient token balance
    pub fn stake_token(ctx: Context<StakeToken>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Withdraws staked tokens back to the user.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Amount exceeds the staked balance
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Pays out all accrued rewards without unstaking.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No rewards have accrued
    /// - The reward vault cannot cover the full amount
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Deposits reward tokens into the pool's reward vault.
    ///
    /// # Errors
    /// Returns an error if amount is zero or insufficient balance.
    pub fn fund_reward_vault(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
        instructions::fund_reward_vault::handler(ctx, amount)
    }
}
