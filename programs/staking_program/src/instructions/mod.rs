//! Instruction handlers for the staking program.
//!
//! This module contains all instruction implementations.

pub mod claim_rewards;
pub mod fund_reward_vault;
pub mod initialize_pool;
pub mod stake;
pub mod unstake;

pub use claim_rewards::*;
pub use fund_reward_vault::*;
pub use initialize_pool::*;
pub use stake::*;
pub use unstake::*;
