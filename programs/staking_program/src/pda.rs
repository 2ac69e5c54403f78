//! Program-derived address helpers.
//!
//! Handlers verify the same seeds through Anchor `seeds`/`bump` constraints;
//! these functions let clients and tests locate pool, vault and user stake
//! accounts without storing cross-references. The returned bump is the
//! discriminant that pushes the address off the ed25519 curve.

use anchor_lang::prelude::*;

use crate::constants::*;

/// Address of the pool for an (authority, staking mint, reward mint) triple.
pub fn staking_pool_address(
    program_id: &Pubkey,
    authority: &Pubkey,
    staking_mint: &Pubkey,
    reward_mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            STAKING_POOL_SEED,
            authority.as_ref(),
            staking_mint.as_ref(),
            reward_mint.as_ref(),
        ],
        program_id,
    )
}

/// Address of the vault holding a pool's staked tokens.
pub fn staking_vault_address(program_id: &Pubkey, staking_pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKING_VAULT_SEED, staking_pool.as_ref()], program_id)
}

/// Address of the vault holding a pool's reward tokens.
pub fn reward_vault_address(program_id: &Pubkey, staking_pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_VAULT_SEED, staking_pool.as_ref()], program_id)
}

/// Address of a user's stake record in a pool.
pub fn user_stake_address(program_id: &Pubkey, staking_pool: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_STAKE_SEED, staking_pool.as_ref(), user.as_ref()],
        program_id,
    )
}
