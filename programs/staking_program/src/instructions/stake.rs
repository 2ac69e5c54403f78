//! Stake instruction handler.
//!
//! Handles depositing staking tokens into a pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::ledger;
use crate::state::{StakingPool, UserStake};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct StakeToken<'info> {
    /// The user staking tokens.
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

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_pool.staking_mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// User's stake account (created on first stake).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, staking_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Stake tokens into the pool.
///
/// Rewards owed for the time since the last checkpoint are settled on the
/// previous balance before `amount` is added.
///
/// # Arguments
/// * `ctx` - StakeToken accounts context
/// * `amount` - Amount of staking tokens to deposit
pub fn handler(ctx: Context<StakeToken>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    let transition = ledger::stake(
        &ctx.accounts.staking_pool,
        ctx.accounts.staking_pool.key(),
        &ctx.accounts.user_stake,
        ctx.accounts.user.key(),
        ctx.bumps.user_stake,
        amount,
        clock.unix_timestamp,
    )?;

    // Transfer tokens from user to vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, transition.amount)?;

    ctx.accounts.staking_pool.set_inner(transition.pool);
    ctx.accounts.user_stake.set_inner(transition.user_stake);

    let user_stake = &ctx.accounts.user_stake;
    let staking_pool = &ctx.accounts.staking_pool;

    msg!("Staked {} tokens", amount);
    msg!("Total staked by user: {}", user_stake.deposited_amount);
    msg!("Accumulated rewards: {}", user_stake.accumulated_rewards);

    emit!(Staked {
        pool: staking_pool.key(),
        user: user_stake.owner,
        amount,
        deposited_amount: user_stake.deposited_amount,
        total_staked: staking_pool.total_staked,
    });

    Ok(())
}
