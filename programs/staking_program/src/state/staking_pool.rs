use anchor_lang::prelude::*;

use crate::constants::STAKING_POOL_SEED;
use crate::error::StakingError;

#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StakingPool {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,

    /// Reward tokens per staked token per second, scaled by 10^9.
    pub reward_rate: u64,
    pub apy_bps: u32,

    /// Always equal to the staking vault balance.
    pub total_staked: u64,
    pub total_rewards_distributed: u64,
    pub staker_count: u64,

    pub created_at: i64,

    pub bump: u8,
    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
}

impl StakingPool {
    pub const LEN: usize = 8
        + (32 * 5)
        + 8 + 4
        + (8 * 3)
        + 8
        + 3;

    /// A zeroed account created by `init_if_needed` has no authority yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Seeds the pool PDA signs vault transfers with.
    pub fn signer_seeds(&self) -> [&[u8]; 5] {
        [
            STAKING_POOL_SEED,
            self.authority.as_ref(),
            self.staking_mint.as_ref(),
            self.reward_mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_reward_payout(&mut self, amount: u64) -> Result<()> {
        self.total_rewards_distributed = self
            .total_rewards_distributed
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}
