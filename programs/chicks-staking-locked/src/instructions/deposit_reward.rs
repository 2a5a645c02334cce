use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};
use anchor_spl::associated_token::get_associated_token_address;

use crate::pda::PoolAddresses;

/// Fund a pool's reward balance
///
/// Moves `amount` base units from the authority's associated token account
/// into the pool vault; the program adds it to `remain_reward_amount`.
///
/// # Arguments
/// * `vault_bump` - Bump of the token vault PDA
/// * `staking_bump` - Bump of the v3 staking account PDA
/// * `pool_handle` - Trimmed pool handle
/// * `amount` - Reward amount in base units
///
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct DepositRewardArgs {
    pub vault_bump: u8,
    pub staking_bump: u8,
    pub pool_handle: String,
    pub amount: u64,
}

impl Discriminator for DepositRewardArgs {
    // sha256("global:deposit_reward")[..8]
    const DISCRIMINATOR: &'static [u8] = &[245, 216, 9, 179, 237, 49, 165, 181];
}

impl InstructionData for DepositRewardArgs {}

impl DepositRewardArgs {
    pub fn new(pool: &PoolAddresses, amount: u64) -> Self {
        Self {
            vault_bump: pool.vault_bump,
            staking_bump: pool.staking_v3_bump,
            pool_handle: pool.handle.clone(),
            amount,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DepositReward {
    pub token_mint: Pubkey,
    /// Authority's associated token account for `token_mint`
    pub token_from: Pubkey,
    pub token_from_authority: Pubkey,
    pub token_vault: Pubkey,
    pub staking_account_v3: Pubkey,
    pub token_program: Pubkey,
}

impl DepositReward {
    pub fn new(pool: &PoolAddresses, authority: Pubkey) -> Self {
        Self {
            token_mint: pool.mint,
            token_from: get_associated_token_address(&authority, &pool.mint),
            token_from_authority: authority,
            token_vault: pool.vault,
            staking_account_v3: pool.staking_v3,
            token_program: anchor_spl::token::ID,
        }
    }
}

impl ToAccountMetas for DepositReward {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new(self.token_from, false),
            AccountMeta::new_readonly(self.token_from_authority, true),
            AccountMeta::new(self.token_vault, false),
            AccountMeta::new(self.staking_account_v3, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}
