//! Claim rewards instruction handler.
//!
//! Handles paying out accrued rewards without unstaking.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsClaimed;
use crate::ledger;
use crate::state::{StakingPool, UserStake};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking pool.
    #[account(
        mut,
        seeds = [
            STAKING_POOL_SEED,
            staking_pool.authority.as_ref(),
            staking_pool.staking_mint.as_ref(),
            staking_pool.reward_mint.as_ref()
        ],
        bump = staking_pool.bump,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Pool's reward vault.
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.reward_vault_bump
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_reward_account.mint == staking_pool.reward_mint @ StakingError::MintMismatch,
        constraint = user_reward_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// User's stake account.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, staking_pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_stake.staking_pool == staking_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim all accrued rewards.
///
/// The full amount is paid or the claim fails; an underfunded reward vault
/// never produces a partial payout.
///
/// # Errors
/// - `NoRewardsToClaim` if nothing has accrued
/// - `InsufficientRewardVault` if the vault cannot cover the full amount
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let clock = Clock::get()?;

    let transition = ledger::claim(
        &ctx.accounts.staking_pool,
        &ctx.accounts.user_stake,
        ctx.accounts.reward_vault.amount,
        clock.unix_timestamp,
    )?;

    // Transfer rewards from vault to user using the pool PDA as signer
    {
        let seeds = ctx.accounts.staking_pool.signer_seeds();
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.reward_vault.to_account_info(),
            to: ctx.accounts.user_reward_account.to_account_info(),
            authority: ctx.accounts.staking_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, transition.amount)?;
    }

    let claimed = transition.amount;
    ctx.accounts.staking_pool.set_inner(transition.pool);
    ctx.accounts.user_stake.set_inner(transition.user_stake);

    let user_stake = &ctx.accounts.user_stake;
    let staking_pool = &ctx.accounts.staking_pool;

    msg!("Claimed {} reward tokens", claimed);
    msg!("Total rewards claimed by user: {}", user_stake.total_rewards_claimed);
    msg!("Total distributed from pool: {}", staking_pool.total_rewards_distributed);

    emit!(RewardsClaimed {
        pool: staking_pool.key(),
        user: user_stake.owner,
        amount: claimed,
        total_rewards_claimed: user_stake.total_rewards_claimed,
    });

    Ok(())
}
