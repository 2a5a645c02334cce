use anchor_lang::prelude::Pubkey;

use crate::constants::{
    MAX_HANDLE_LEN, STAKING_PDA_SEED_V2, STAKING_PDA_SEED_V3, USER_STAKING_PDA_SEED_V3,
};
use crate::error::StakingClientError;

/// Trim and validate an operator-supplied pool handle
///
/// The handle is used verbatim as a PDA seed, so it has to be non-empty and
/// fit in a single seed.
pub fn normalize_handle(handle: &str) -> Result<&str, StakingClientError> {
    let handle = handle.trim();
    if handle.is_empty() {
        return Err(StakingClientError::EmptyHandle);
    }
    if handle.len() > MAX_HANDLE_LEN {
        return Err(StakingClientError::HandleTooLong(handle.len()));
    }
    Ok(handle)
}

fn find(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    what: &'static str,
) -> Result<(Pubkey, u8), StakingClientError> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(StakingClientError::NoViableBump(what))
}

/// Token vault holding staked tokens and reward funds
/// PDA: [mint, handle]
pub fn find_vault_address(
    mint: &Pubkey,
    handle: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), StakingClientError> {
    find(
        &[mint.as_ref(), handle.as_bytes()],
        program_id,
        "token vault",
    )
}

/// Pool state account, current layout
/// PDA: [mint, "staking_v3", handle]
pub fn find_staking_v3_address(
    mint: &Pubkey,
    handle: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), StakingClientError> {
    find(
        &[mint.as_ref(), STAKING_PDA_SEED_V3, handle.as_bytes()],
        program_id,
        "staking account v3",
    )
}

/// Pool state account, legacy layout. Not keyed by mint.
/// PDA: ["staking_v2", handle]
pub fn find_staking_v2_address(
    handle: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), StakingClientError> {
    find(
        &[STAKING_PDA_SEED_V2, handle.as_bytes()],
        program_id,
        "staking account v2",
    )
}

/// Per-staker position in a v3 pool
/// PDA: [mint, "user_staking_v3", handle, staker]
pub fn find_user_staking_v3_address(
    mint: &Pubkey,
    handle: &str,
    staker: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), StakingClientError> {
    find(
        &[
            mint.as_ref(),
            USER_STAKING_PDA_SEED_V3,
            handle.as_bytes(),
            staker.as_ref(),
        ],
        program_id,
        "user staking account v3",
    )
}

/// Every pool-level address an admin command needs, with bumps
#[derive(Debug, Clone, PartialEq)]
pub struct PoolAddresses {
    pub program_id: Pubkey,
    pub mint: Pubkey,
    pub handle: String,

    pub vault: Pubkey,
    pub vault_bump: u8,

    pub staking_v3: Pubkey,
    pub staking_v3_bump: u8,

    pub staking_v2: Pubkey,
    pub staking_v2_bump: u8,
}

impl PoolAddresses {
    /// Normalize `handle` and derive the vault and both staking accounts
    pub fn derive(
        program_id: &Pubkey,
        mint: &Pubkey,
        handle: &str,
    ) -> Result<Self, StakingClientError> {
        let handle = normalize_handle(handle)?;

        let (vault, vault_bump) = find_vault_address(mint, handle, program_id)?;
        let (staking_v3, staking_v3_bump) = find_staking_v3_address(mint, handle, program_id)?;
        let (staking_v2, staking_v2_bump) = find_staking_v2_address(handle, program_id)?;

        Ok(Self {
            program_id: *program_id,
            mint: *mint,
            handle: handle.to_string(),
            vault,
            vault_bump,
            staking_v3,
            staking_v3_bump,
            staking_v2,
            staking_v2_bump,
        })
    }

    pub fn user_staking_v3(
        &self,
        staker: &Pubkey,
    ) -> Result<(Pubkey, u8), StakingClientError> {
        find_user_staking_v3_address(&self.mint, &self.handle, staker, &self.program_id)
    }
}
