use anyhow::{Context, Result};
use chicks_staking_locked::utils::{apr_to_reward_rate, lock_to_seconds};
use chicks_staking_locked::{Initialize, InitializeArgs};
use log::info;

use crate::client::StakingClient;
use crate::config::Settings;

/// Create a v3 pool for `handle` on the configured token mint
///
/// `lock` below 10 000 is days, otherwise seconds. `interval` is seconds.
pub fn create_staking_v3(
    settings: &Settings,
    handle: &str,
    apr: f64,
    lock: u64,
    interval: u64,
) -> Result<()> {
    let reward_rate = apr_to_reward_rate(apr)?;
    let lock_time = lock_to_seconds(lock);

    let client = StakingClient::connect_signer(settings, handle)?;
    let pool = &client.pool;
    info!(
        "initialize pool '{}' for mint {}: reward_rate={} lock_time={}s vesting_interval={}s",
        pool.handle, pool.mint, reward_rate, lock_time, interval
    );

    let signature = client
        .program()
        .request()
        .accounts(Initialize::new(pool, client.payer()))
        .args(InitializeArgs::new(pool, reward_rate, lock_time, interval))
        .send()
        .context("initialize transaction failed")?;

    info!("staking pool '{}' created at {}", pool.handle, pool.staking_v3);
    println!("Signature: {signature}");
    Ok(())
}
