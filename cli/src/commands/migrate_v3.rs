use anyhow::{Context, Result};
use chicks_staking_locked::utils::apr_to_reward_rate;
use chicks_staking_locked::{MigrateV3, MigrateV3Args};
use log::info;

use crate::client::StakingClient;
use crate::config::Settings;

/// Move the legacy v2 pool `handle` into the v3 layout
pub fn migrate_v3(settings: &Settings, handle: &str, apr: f64, interval: u64) -> Result<()> {
    let reward_rate = apr_to_reward_rate(apr)?;

    let client = StakingClient::connect_signer(settings, handle)?;
    let pool = &client.pool;
    info!(
        "migrate pool '{}': {} -> {}, reward_rate={} vesting_interval={}s",
        pool.handle, pool.staking_v2, pool.staking_v3, reward_rate, interval
    );

    let signature = client
        .program()
        .request()
        .accounts(MigrateV3::new(pool, client.payer()))
        .args(MigrateV3Args::new(pool, reward_rate, interval))
        .send()
        .context("migrate_v3 transaction failed")?;

    println!("Signature: {signature}");
    Ok(())
}
