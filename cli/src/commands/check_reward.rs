use anyhow::Result;
use log::info;

use crate::client::StakingClient;
use crate::config::Settings;
use crate::format::group_thousands;

/// Print the reward balance still held for a pool
pub fn check_reward(settings: &Settings, handle: &str) -> Result<()> {
    let client = StakingClient::connect_readonly(settings, handle)?;
    let account = client.fetch_staking_v3()?;

    info!(
        "pool '{}': apr={}% lock_time={}s vesting_interval={}s staked={} frozen={}",
        client.pool.handle,
        account.apr(),
        account.lock_time,
        account.vesting_interval,
        group_thousands(account.total_staked_amount),
        account.freeze_program
    );
    info!(
        "remaining rewards: {} tokens at {} decimals",
        account.remain_reward_ui(settings.decimals),
        settings.decimals
    );

    println!(
        "Remaining Amount {}",
        group_thousands(account.remain_reward_amount)
    );
    Ok(())
}
