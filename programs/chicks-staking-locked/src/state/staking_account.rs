use anchor_lang::prelude::*;

use crate::utils::{reward_rate_to_apr, to_ui_amount};

/// Pool state, v3 layout
/// PDA: [mint, "staking_v3", handle]
///
/// Owned and written by the program; the admin tool only reads it.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakingAccountV3 {
    /// Wallet that created (or migrated) the pool
    pub initializer_key: Pubkey,

    /// Staking token mint
    pub token_mint: Pubkey,

    /// Reward rate in basis points (APR * 100)
    pub reward_rate: u64,

    /// Minimum lock before unstaking, in seconds
    pub lock_time: u64,

    /// Vesting step for released rewards, in seconds
    pub vesting_interval: u64,

    /// Tokens currently staked across all users
    pub total_staked_amount: u64,

    /// Reward funds deposited and not yet paid out
    pub remain_reward_amount: u64,

    /// Staking disabled by the admin
    pub freeze_program: bool,
}

impl StakingAccountV3 {
    pub const SIZE: usize = 8 + // discriminator
        32 + // initializer_key
        32 + // token_mint
        8 +  // reward_rate
        8 +  // lock_time
        8 +  // vesting_interval
        8 +  // total_staked_amount
        8 +  // remain_reward_amount
        1; // freeze_program

    pub fn apr(&self) -> f64 {
        reward_rate_to_apr(self.reward_rate)
    }

    pub fn remain_reward_ui(&self, decimals: u8) -> f64 {
        to_ui_amount(self.remain_reward_amount, decimals)
    }
}
