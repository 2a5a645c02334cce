use anyhow::{Context, Result};
use chicks_staking_locked::utils::to_base_units;
use chicks_staking_locked::{DepositReward, DepositRewardArgs};
use log::info;

use crate::client::StakingClient;
use crate::config::Settings;
use crate::format::group_thousands;

/// Transfer `amount` whole tokens from the wallet's associated token account
/// into the pool vault
pub fn deposit_reward(settings: &Settings, handle: &str, amount: u64) -> Result<()> {
    let base_units = to_base_units(amount, settings.decimals)?;

    let client = StakingClient::connect_signer(settings, handle)?;
    let pool = &client.pool;
    let accounts = DepositReward::new(pool, client.payer());
    info!(
        "deposit {} base units ({} tokens, {} decimals) from {} into vault {}",
        group_thousands(base_units),
        group_thousands(amount),
        settings.decimals,
        accounts.token_from,
        pool.vault
    );

    let signature = client
        .program()
        .request()
        .accounts(accounts)
        .args(DepositRewardArgs::new(pool, base_units))
        .send()
        .context("deposit_reward transaction failed")?;

    println!("Signature: {signature}");
    Ok(())
}
