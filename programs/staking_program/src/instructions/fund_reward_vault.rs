/// Fund reward vault instruction handler.
///
/// Handles depositing reward tokens into a pool's reward vault.
///
/// ## Security Guarantees
/// - Vault validation ensures the pool's own reward PDA is credited
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no authority restriction)
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardVaultFunded;
use crate::state::StakingPool;

/// Accounts required for funding the reward vault.
#[derive(Accounts)]
pub struct FundRewardVault<'info> {
    /// The funder (anyone can fund).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The staking pool.
    /// SECURITY: PDA + has_one validations.
    #[account(
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

    /// Funder's token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == staking_pool.reward_mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, staking_pool.key().as_ref()],
        bump = staking_pool.reward_vault_bump
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward vault.
///
/// # Arguments
/// * `ctx` - FundRewardVault accounts context
/// * `amount` - Amount of reward tokens to deposit
pub fn handler(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Reload vault to get updated balance
    ctx.accounts.reward_vault.reload()?;
    let vault_balance = ctx.accounts.reward_vault.amount;

    msg!("Reward vault funded with {} tokens", amount);
    msg!("New reward vault balance: {}", vault_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(RewardVaultFunded {
        pool: ctx.accounts.staking_pool.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
    });

    Ok(())
}
