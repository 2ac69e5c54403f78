use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use staking_program::error::StakingError;
use staking_program::ledger::{self, Transition};
use staking_program::pda;
use staking_program::rewards::apy_bps_to_rate;
use staking_program::state::{StakingPool, UserStake};

const TOKEN: u64 = 1_000_000_000;

/// In-memory stand-in for the accounts one pool touches. Failed transitions
/// are never committed, mirroring a rolled-back transaction.
struct PoolHarness {
    pool_key: Pubkey,
    pool: StakingPool,
    users: Vec<(Pubkey, UserStake)>,
    staking_vault: u64,
    reward_vault: u64,
    now: i64,
}

impl PoolHarness {
    fn new(apy_bps: u32, users: usize, reward_funding: u64) -> Self {
        let authority = Pubkey::new_unique();
        let staking_mint = Pubkey::new_unique();
        let reward_mint = Pubkey::new_unique();
        let (pool_key, bump) =
            pda::staking_pool_address(&staking_program::ID, &authority, &staking_mint, &reward_mint);

        let pool = StakingPool {
            authority,
            staking_mint,
            reward_mint,
            reward_rate: apy_bps_to_rate(apy_bps).unwrap(),
            apy_bps,
            bump,
            ..StakingPool::default()
        };

        Self {
            pool_key,
            pool,
            users: (0..users)
                .map(|_| (Pubkey::new_unique(), UserStake::default()))
                .collect(),
            staking_vault: 0,
            reward_vault: reward_funding,
            now: 1_700_000_000,
        }
    }

    fn commit(&mut self, user: usize, transition: Transition) {
        self.pool = transition.pool;
        self.users[user].1 = transition.user_stake;
    }

    fn stake(&mut self, user: usize, amount: u64) -> Result<()> {
        let (key, record) = &self.users[user];
        let (_, bump) = pda::user_stake_address(&staking_program::ID, &self.pool_key, key);
        let t = ledger::stake(&self.pool, self.pool_key, record, *key, bump, amount, self.now)?;
        self.staking_vault += t.amount;
        self.commit(user, t);
        Ok(())
    }

    fn unstake(&mut self, user: usize, amount: u64) -> Result<()> {
        let t = ledger::unstake(&self.pool, &self.users[user].1, amount, self.now)?;
        self.staking_vault -= t.amount;
        self.commit(user, t);
        Ok(())
    }

    fn claim(&mut self, user: usize) -> Result<u64> {
        let t = ledger::claim(&self.pool, &self.users[user].1, self.reward_vault, self.now)?;
        let paid = t.amount;
        self.reward_vault -= paid;
        self.commit(user, t);
        Ok(paid)
    }

    fn record(&self, user: usize) -> &UserStake {
        &self.users[user].1
    }

    fn assert_conserved(&self) {
        let deposited: u64 = self.users.iter().map(|(_, s)| s.deposited_amount).sum();
        assert_eq!(self.pool.total_staked, deposited);
        assert_eq!(self.pool.total_staked, self.staking_vault);

        let stakers = self
            .users
            .iter()
            .filter(|(_, s)| s.deposited_amount > 0)
            .count() as u64;
        assert_eq!(self.pool.staker_count, stakers);
    }
}

/// Deterministic xorshift so traces are reproducible.
struct Trace(u64);

impl Trace {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

#[test]
fn ten_percent_pool_scenario() {
    let mut h = PoolHarness::new(1_000, 1, 1_000 * TOKEN);
    assert_eq!(h.pool.reward_rate, 3);

    h.stake(0, 500 * TOKEN).unwrap();
    assert_eq!(
        h.claim(0).unwrap_err(),
        Error::from(StakingError::NoRewardsToClaim)
    );

    h.now += 5;
    h.stake(0, 100 * TOKEN).unwrap();
    assert_eq!(h.record(0).accumulated_rewards, 7_500);
    assert_eq!(h.record(0).deposited_amount, 600 * TOKEN);

    h.now += 3;
    assert_eq!(h.claim(0).unwrap(), 7_500 + 5_400);
    assert_eq!(h.record(0).accumulated_rewards, 0);
    assert_eq!(h.reward_vault, 1_000 * TOKEN - 12_900);
    h.assert_conserved();
}

#[test]
fn rejected_operations_leave_state_unchanged() {
    let mut h = PoolHarness::new(1_000, 2, 0);
    h.stake(0, 500 * TOKEN).unwrap();
    h.now += 60;

    let pool_before = h.pool.clone();
    let record_before = h.record(0).clone();
    let vault_before = h.staking_vault;

    let over = record_before.deposited_amount + 1;
    assert_eq!(h.unstake(0, over).unwrap_err(), Error::from(StakingError::InsufficientStake));
    assert_eq!(h.stake(0, 0).unwrap_err(), Error::from(StakingError::InvalidAmount));
    assert_eq!(h.stake(1, 0).unwrap_err(), Error::from(StakingError::InvalidAmount));
    assert_eq!(h.unstake(0, 0).unwrap_err(), Error::from(StakingError::InvalidAmount));
    assert_eq!(
        h.claim(0).unwrap_err(),
        Error::from(StakingError::InsufficientRewardVault)
    );

    assert_eq!(h.pool, pool_before);
    assert_eq!(h.record(0), &record_before);
    assert_eq!(h.record(1), &UserStake::default());
    assert_eq!(h.staking_vault, vault_before);
}

#[test]
fn users_accrue_independently() {
    let mut h = PoolHarness::new(1_000, 2, u64::MAX);
    h.stake(0, 500 * TOKEN).unwrap();
    h.now += 10;
    h.stake(1, 500 * TOKEN).unwrap();
    h.now += 10;

    // alice earned for 20 seconds, bob for 10
    assert_eq!(h.claim(0).unwrap(), 30_000);
    assert_eq!(h.claim(1).unwrap(), 15_000);
    h.assert_conserved();
}

#[test]
fn random_traces_conserve_funds() {
    let mut trace = Trace(0x9E37_79B9_7F4A_7C15);

    for _ in 0..20 {
        let users = 1 + trace.below(5) as usize;
        let apy_bps = trace.below(50_000) as u32;
        let mut h = PoolHarness::new(apy_bps, users, 10_000 * TOKEN);
        let mut last_rewards = vec![0u64; users];

        for _ in 0..200 {
            let user = trace.below(users as u64) as usize;
            h.now += trace.below(3_600) as i64;

            match trace.below(4) {
                0 => {
                    let _ = h.stake(user, trace.below(1_000 * TOKEN));
                }
                1 => {
                    let deposited = h.record(user).deposited_amount;
                    let _ = h.unstake(user, trace.below(deposited + 2));
                }
                2 => {
                    if h.claim(user).is_ok() {
                        assert_eq!(h.record(user).accumulated_rewards, 0);
                        last_rewards[user] = 0;
                    }
                }
                _ => {
                    // accrual alone never decreases what is owed
                    let r = h.record(user).reconcile(h.pool.reward_rate, h.now).unwrap();
                    assert!(r.accumulated_rewards >= h.record(user).accumulated_rewards);
                }
            }

            let owed = h.record(user).accumulated_rewards;
            assert!(owed >= last_rewards[user]);
            last_rewards[user] = owed;
            for (_, record) in &h.users {
                assert!(record.deposited_amount <= h.pool.total_staked);
            }
            h.assert_conserved();
        }
    }
}
