//! State structures for the staking program.
//!
//! This module defines all account structures used to store program state.

pub mod staking_pool;
pub mod user_stake;

pub use staking_pool::*;
pub use user_stake::*;
