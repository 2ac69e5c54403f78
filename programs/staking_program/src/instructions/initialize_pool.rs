/// Initialize pool instruction handler.
///
/// Creates a staking pool for one (authority, staking mint, reward mint)
/// triple together with its two vaults.
///
/// ## Security Guarantees
/// - Both vaults are PDAs whose token authority is the pool PDA
/// - Mints, vaults and the reward rate are fixed at creation
/// - A second initialization of the same triple is rejected
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::PoolInitialized;
use crate::ledger::{self, PoolConfig};
use crate::state::StakingPool;

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `init_if_needed` lets the handler report an existing pool as
///   `AlreadyInitialized` instead of a generic system program failure
/// - Vault seeds bind each vault to exactly one pool
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The pool authority; pays for all three accounts.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The staking pool account.
    /// SECURITY: PDA over authority + both mints makes the triple unique.
    #[account(
        init_if_needed,
        payer = authority,
        space = StakingPool::LEN,
        seeds = [
            STAKING_POOL_SEED,
            authority.key().as_ref(),
            staking_mint.key().as_ref(),
            reward_mint.key().as_ref()
        ],
        bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Mint users stake.
    pub staking_mint: Account<'info, Mint>,

    /// Mint rewards are paid in.
    pub reward_mint: Account<'info, Mint>,

    /// Vault holding staked tokens, controlled by the pool PDA.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STAKING_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = staking_pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Vault holding reward tokens, controlled by the pool PDA.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = staking_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for vault creation.
    pub token_program: Program<'info, Token>,
}

/// Initialize a new staking pool.
///
/// # Arguments
/// * `ctx` - InitializePool accounts context
/// * `apy_bps` - Annual yield in basis points (1000 = 10%), converted once to
///   the per-second rate stored in the pool
///
/// # Errors
/// - `AlreadyInitialized` if the pool PDA already holds a pool
/// - `IdenticalMints` if staking and reward mints are the same
pub fn handler(ctx: Context<InitializePool>, apy_bps: u32) -> Result<()> {
    let clock = Clock::get()?;

    let config = PoolConfig {
        authority: ctx.accounts.authority.key(),
        staking_mint: ctx.accounts.staking_mint.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        staking_vault: ctx.accounts.staking_vault.key(),
        reward_vault: ctx.accounts.reward_vault.key(),
        bump: ctx.bumps.staking_pool,
        staking_vault_bump: ctx.bumps.staking_vault,
        reward_vault_bump: ctx.bumps.reward_vault,
    };
    let pool = ledger::initialize_pool(
        &ctx.accounts.staking_pool,
        config,
        apy_bps,
        clock.unix_timestamp,
    )?;
    let reward_rate = pool.reward_rate;

    ctx.accounts.staking_pool.set_inner(pool);

    msg!("Staking pool initialized: {}", ctx.accounts.staking_pool.key());
    msg!("Staking mint: {}", config.staking_mint);
    msg!("Reward mint: {}", config.reward_mint);
    msg!("APY: {}bp, reward rate: {}", apy_bps, reward_rate);

    emit!(PoolInitialized {
        pool: ctx.accounts.staking_pool.key(),
        authority: config.authority,
        staking_mint: config.staking_mint,
        reward_mint: config.reward_mint,
        apy_bps,
        reward_rate,
    });

    Ok(())
}
