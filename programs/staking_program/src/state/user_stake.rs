use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::rewards::{accrued_rewards, elapsed_seconds};

#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserStake {
    pub owner: Pubkey,
    pub staking_pool: Pubkey,

    pub deposited_amount: u64,
    /// Earned but not yet transferred to the owner.
    pub accumulated_rewards: u64,
    pub total_rewards_claimed: u64,

    /// Unix timestamp up to which rewards have been reconciled.
    pub reward_checkpoint: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 1;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Fresh record for a user's first stake into a pool.
    pub fn open(owner: Pubkey, staking_pool: Pubkey, bump: u8, now: i64) -> Self {
        Self {
            owner,
            staking_pool,
            reward_checkpoint: now,
            bump,
            ..Self::default()
        }
    }

    /// Catch the record up to `now` at the balance held since the checkpoint.
    ///
    /// Must run before any change to `deposited_amount` in the same
    /// instruction. A clock earlier than the checkpoint accrues nothing; the
    /// checkpoint always moves to `now`.
    pub fn reconcile(&self, reward_rate: u64, now: i64) -> Result<Self> {
        let elapsed = elapsed_seconds(self.reward_checkpoint, now);
        let accrued = accrued_rewards(self.deposited_amount, reward_rate, elapsed)?;

        Ok(Self {
            accumulated_rewards: self
                .accumulated_rewards
                .checked_add(accrued)
                .ok_or(StakingError::MathOverflow)?,
            reward_checkpoint: now,
            ..self.clone()
        })
    }

    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.deposited_amount,
            StakingError::InsufficientStake
        );
        self.deposited_amount -= amount;
        Ok(())
    }

    /// Zero the accumulated rewards, returning the amount owed.
    pub fn take_rewards(&mut self) -> Result<u64> {
        let owed = self.accumulated_rewards;
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(owed)
            .ok_or(StakingError::MathOverflow)?;
        self.accumulated_rewards = 0;
        Ok(owed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn staked(amount: u64, checkpoint: i64) -> UserStake {
        let mut stake = UserStake::open(Pubkey::new_unique(), Pubkey::new_unique(), 255, checkpoint);
        stake.deposit(amount).unwrap();
        stake
    }

    #[test]
    fn len_covers_serialized_size() {
        let mut data = Vec::new();
        UserStake::default().try_serialize(&mut data).unwrap();
        assert_eq!(UserStake::LEN, data.len());
    }

    #[test]
    fn reconcile_accrues_and_moves_checkpoint() {
        let stake = staked(500_000_000_000, 1_000);

        let next = stake.reconcile(3, 1_005).unwrap();
        assert_eq!(next.accumulated_rewards, 7_500);
        assert_eq!(next.reward_checkpoint, 1_005);
        assert_eq!(next.deposited_amount, stake.deposited_amount);

        // the input snapshot is untouched
        assert_eq!(stake.accumulated_rewards, 0);
        assert_eq!(stake.reward_checkpoint, 1_000);
    }

    #[test]
    fn reconcile_twice_at_same_instant_is_idempotent() {
        let once = staked(1_000_000_000, 0).reconcile(7, 60).unwrap();
        let twice = once.reconcile(7, 60).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn reconcile_with_clock_regression_accrues_nothing() {
        let stake = staked(1_000_000_000_000, 1_000);

        let next = stake.reconcile(3, 900).unwrap();
        assert_eq!(next.accumulated_rewards, 0);
        assert_eq!(next.reward_checkpoint, 900);

        // accrual resumes from the regressed checkpoint: 110 seconds
        let later = next.reconcile(3, 1_010).unwrap();
        assert_eq!(later.accumulated_rewards, 330_000);
        assert_eq!(later.reward_checkpoint, 1_010);
    }

    #[test]
    fn withdraw_more_than_deposited_is_rejected() {
        let mut stake = staked(100, 0);
        let err = stake.withdraw(101).unwrap_err();
        assert_eq!(err, Error::from(StakingError::InsufficientStake));
        assert_eq!(stake.deposited_amount, 100);

        stake.withdraw(100).unwrap();
        assert_eq!(stake.deposited_amount, 0);
    }

    #[test]
    fn take_rewards_zeroes_and_tallies() {
        let mut stake = staked(500_000_000_000, 0).reconcile(3, 5).unwrap();
        assert_eq!(stake.take_rewards().unwrap(), 7_500);
        assert_eq!(stake.accumulated_rewards, 0);
        assert_eq!(stake.total_rewards_claimed, 7_500);
    }
}
