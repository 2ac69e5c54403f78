//! Unstake instruction handler.
//!
//! Handles withdrawing staked tokens from the pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::ledger;
use crate::state::{StakingPool, UserStake};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The user unstaking tokens.
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
        has_one = staking_vault @ StakingError::VaultMismatch
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Pool's staking vault.
    #[account(
        mut,
        seeds = [STAKING_VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.staking_vault_bump
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// User's token account for receiving unstaked tokens.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_pool.staking_mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

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

/// Unstake tokens from the pool.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
/// * `amount` - Amount of staking tokens to withdraw
///
/// # Errors
/// - `InvalidAmount` if `amount` is zero
/// - `InsufficientStake` if `amount` exceeds the deposited balance
pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    let transition = ledger::unstake(
        &ctx.accounts.staking_pool,
        &ctx.accounts.user_stake,
        amount,
        clock.unix_timestamp,
    )?;

    // Transfer tokens from vault to user using the pool PDA as signer
    {
        let seeds = ctx.accounts.staking_pool.signer_seeds();
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.staking_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.staking_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, transition.amount)?;
    }

    ctx.accounts.staking_pool.set_inner(transition.pool);
    ctx.accounts.user_stake.set_inner(transition.user_stake);

    let user_stake = &ctx.accounts.user_stake;
    let staking_pool = &ctx.accounts.staking_pool;

    msg!("Unstaked {} tokens", amount);
    msg!("Remaining staked: {}", user_stake.deposited_amount);
    msg!("Accumulated rewards: {}", user_stake.accumulated_rewards);

    emit!(Unstaked {
        pool: staking_pool.key(),
        user: user_stake.owner,
        amount,
        deposited_amount: user_stake.deposited_amount,
        total_staked: staking_pool.total_staked,
    });

    Ok(())
}
