pub mod check_reward;
pub mod create_staking_v3;
pub mod deposit_reward;
pub mod migrate_v3;
pub mod show_addresses;

pub use check_reward::check_reward;
pub use create_staking_v3::create_staking_v3;
pub use deposit_reward::deposit_reward;
pub use migrate_v3::migrate_v3;
pub use show_addresses::show_addresses;

use anyhow::Result;

use crate::cli::Commands;
use crate::config::{FileConfig, Settings};

/// Resolves settings for `command` and runs it to completion.
pub fn run(command: Commands, file: &FileConfig) -> Result<()> {
    let settings = Settings::resolve(file, command.overrides())?;
    let handle = command.handle().to_string();

    match command {
        Commands::CreateStakingV3 {
            apr,
            lock,
            interval,
            ..
        } => create_staking_v3(&settings, &handle, apr, lock, interval),
        Commands::MigrateV3 { apr, interval, .. } => {
            migrate_v3(&settings, &handle, apr, interval)
        }
        Commands::DepositReward { amount, .. } => deposit_reward(&settings, &handle, amount),
        Commands::CheckReward { .. } => check_reward(&settings, &handle),
        Commands::ShowAddresses { staker, .. } => {
            show_addresses(&settings, &handle, staker.as_ref())
        }
    }
}
