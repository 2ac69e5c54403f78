//! Error types for the staking program.
//!
//! Every failure rejects the whole transaction; no account is left partially
//! updated.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input validation errors
//! - 6010-6019: State/balance errors
//! - 6020-6029: Math/overflow errors
//! - 6030-6039: Authorization errors
//! - 6040-6049: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6009) ==========

    /// [6000] Stake, unstake and funding amounts must be non-zero.
    #[msg("Invalid amount (must be greater than 0)")]
    InvalidAmount = 0,

    /// [6001] A pool cannot stake and reward the same mint.
    #[msg("Staking mint and reward mint must differ")]
    IdenticalMints,

    // ========== State/Balance Errors (6010-6019) ==========

    /// [6010] A pool already exists for this authority and mint pair.
    #[msg("Staking pool is already initialized")]
    AlreadyInitialized = 10,

    /// [6011] Unstake amount exceeds the user's deposited balance.
    #[msg("Insufficient staked amount")]
    InsufficientStake,

    /// [6012] Nothing has accrued since the last claim.
    #[msg("No rewards available to claim")]
    NoRewardsToClaim,

    /// [6013] The reward vault holds less than the amount owed.
    #[msg("Reward vault balance is insufficient for this claim")]
    InsufficientRewardVault,

    // ========== Math/Overflow Errors (6020-6029) ==========

    /// [6020] Arithmetic overflow or underflow during a balance or reward calculation.
    #[msg("Math overflow occurred during calculation")]
    MathOverflow = 20,

    // ========== Authorization Errors (6030-6039) ==========

    /// [6030] Signer does not own the user stake account.
    #[msg("Unauthorized access")]
    Unauthorized = 30,

    // ========== Account Validation Errors (6040-6049) ==========

    /// [6040] Token account or mint does not match the pool's mints.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch = 40,

    /// [6041] Vault does not match the pool's stored vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// [6042] User stake account belongs to another pool.
    #[msg("User stake account does not belong to this pool")]
    StakePoolMismatch,
}
