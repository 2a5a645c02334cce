use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;
use anchor_lang::{Discriminator, InstructionData};

use crate::pda::PoolAddresses;

// =============================================================================
// Migrate V3
// =============================================================================
// Copies a legacy ["staking_v2", handle] pool into the mint-keyed v3 account,
// setting the reward rate and vesting interval the v2 layout did not have.

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct MigrateV3Args {
    pub staking_v2_bump: u8,
    pub staking_v3_bump: u8,
    pub pool_handle: String,
    pub reward_rate: u64,
    pub vesting_interval: u64,
}

impl Discriminator for MigrateV3Args {
    // sha256("global:migrate_v3")[..8]
    const DISCRIMINATOR: &'static [u8] = &[245, 170, 103, 124, 144, 187, 21, 102];
}

impl InstructionData for MigrateV3Args {}

impl MigrateV3Args {
    pub fn new(pool: &PoolAddresses, reward_rate: u64, vesting_interval: u64) -> Self {
        Self {
            staking_v2_bump: pool.staking_v2_bump,
            staking_v3_bump: pool.staking_v3_bump,
            pool_handle: pool.handle.clone(),
            reward_rate,
            vesting_interval,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MigrateV3 {
    /// Pool admin (signer, payer for the v3 account)
    pub initializer: Pubkey,
    pub token_mint: Pubkey,
    pub staking_account_v2: Pubkey,
    pub staking_account_v3: Pubkey,
    pub system_program: Pubkey,
    pub token_program: Pubkey,
    pub rent: Pubkey,
}

impl MigrateV3 {
    pub fn new(pool: &PoolAddresses, initializer: Pubkey) -> Self {
        Self {
            initializer,
            token_mint: pool.mint,
            staking_account_v2: pool.staking_v2,
            staking_account_v3: pool.staking_v3,
            system_program: anchor_lang::system_program::ID,
            token_program: anchor_spl::token::ID,
            rent: sysvar::rent::ID,
        }
    }
}

impl ToAccountMetas for MigrateV3 {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.initializer, true),
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new(self.staking_account_v2, false),
            AccountMeta::new(self.staking_account_v3, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.rent, false),
        ]
    }
}
