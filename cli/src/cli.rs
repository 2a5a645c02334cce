// src/cli.rs - Global options and command definitions

use std::path::PathBuf;

use anchor_lang::prelude::Pubkey;
use clap::{Args, Parser, Subcommand};

use crate::cluster::Env;
use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "staking-admin",
    version,
    about = "Admin tool for the Chicks locked staking program",
    long_about = None
)]
pub struct Cli {
    /// Optional TOML file with default env, url, keypair, token and decimals.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log derived addresses and arguments at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a v3 staking pool and its token vault.
    #[command(name = "create-staking-v3")]
    CreateStakingV3 {
        #[command(flatten)]
        wallet: WalletArgs,
        #[command(flatten)]
        cluster: ClusterArgs,
        #[command(flatten)]
        pool: PoolArgs,
        /// Reward rate as APR percent, e.g. 30
        #[arg(long)]
        apr: f64,
        /// Lock time in days (e.g. 120 for 4 months); values >= 10000 are seconds
        #[arg(long)]
        lock: u64,
        /// Vesting interval in seconds, e.g. 86400 for 1 day
        #[arg(long)]
        interval: u64,
    },

    /// Migrate a v2 pool into the v3 layout.
    #[command(name = "migrate-v3")]
    MigrateV3 {
        #[command(flatten)]
        wallet: WalletArgs,
        #[command(flatten)]
        cluster: ClusterArgs,
        #[command(flatten)]
        pool: PoolArgs,
        /// Reward rate as APR percent, e.g. 30
        #[arg(long)]
        apr: f64,
        /// Vesting interval in seconds, e.g. 86400 for 1 day
        #[arg(long)]
        interval: u64,
    },

    /// Transfer reward tokens from the wallet into a pool.
    #[command(name = "deposit-reward")]
    DepositReward {
        #[command(flatten)]
        wallet: WalletArgs,
        #[command(flatten)]
        cluster: ClusterArgs,
        #[command(flatten)]
        pool: PoolArgs,
        /// Amount in whole tokens, e.g. 10000
        #[arg(long)]
        amount: u64,
        /// Token decimals [default: 9]
        #[arg(long)]
        decimals: Option<u8>,
    },

    /// Print the reward balance left in a pool.
    #[command(name = "check-reward")]
    CheckReward {
        #[command(flatten)]
        cluster: ClusterArgs,
        #[command(flatten)]
        pool: PoolArgs,
    },

    /// Print every derived address of a pool without contacting the cluster.
    #[command(name = "show-addresses")]
    ShowAddresses {
        #[command(flatten)]
        cluster: ClusterArgs,
        #[command(flatten)]
        pool: PoolArgs,
        /// Also derive this staker's position account
        #[arg(long)]
        staker: Option<Pubkey>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct WalletArgs {
    /// Solana wallet location
    #[arg(short, long)]
    pub keypair: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ClusterArgs {
    /// Solana cluster env name [default: mainnet-beta]
    #[arg(short, long, value_enum)]
    pub env: Option<Env>,

    /// Custom RPC endpoint; the program deployment still follows --env
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PoolArgs {
    /// Staking pool handle
    #[arg(short = 'H', long)]
    pub handle: String,

    /// Staking token mint [default: CHICKS]
    #[arg(short, long)]
    pub token: Option<Pubkey>,
}

impl Commands {
    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        let (wallet, cluster, pool, decimals) = match self {
            Commands::CreateStakingV3 {
                wallet,
                cluster,
                pool,
                ..
            }
            | Commands::MigrateV3 {
                wallet,
                cluster,
                pool,
                ..
            } => (Some(wallet), cluster, pool, None),
            Commands::DepositReward {
                wallet,
                cluster,
                pool,
                decimals,
                ..
            } => (Some(wallet), cluster, pool, *decimals),
            Commands::CheckReward { cluster, pool }
            | Commands::ShowAddresses { cluster, pool, .. } => (None, cluster, pool, None),
        };

        Overrides {
            env: cluster.env,
            url: cluster.url.clone(),
            keypair: wallet.and_then(|w| w.keypair.clone()),
            token: pool.token,
            decimals,
        }
    }

    pub fn handle(&self) -> &str {
        match self {
            Commands::CreateStakingV3 { pool, .. }
            | Commands::MigrateV3 { pool, .. }
            | Commands::DepositReward { pool, .. }
            | Commands::CheckReward { pool, .. }
            | Commands::ShowAddresses { pool, .. } => &pool.handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "staking-admin",
            "create-staking-v3",
            "-k",
            "/tmp/admin.json",
            "-e",
            "devnet",
            "-H",
            " gold ",
            "--apr",
            "30",
            "--lock",
            "120",
            "--interval",
            "86400",
        ])
        .unwrap();

        assert_eq!(cli.command.handle(), " gold ");
        let overrides = cli.command.overrides();
        assert_eq!(overrides.env, Some(Env::Devnet));
        assert_eq!(overrides.keypair, Some(PathBuf::from("/tmp/admin.json")));
        assert_eq!(overrides.token, None);
        match cli.command {
            Commands::CreateStakingV3 {
                apr,
                lock,
                interval,
                ..
            } => {
                assert_eq!(apr, 30.0);
                assert_eq!(lock, 120);
                assert_eq!(interval, 86_400);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_deposit_and_check() {
        let token = Pubkey::new_unique();
        let token_arg = token.to_string();
        let cli = Cli::try_parse_from([
            "staking-admin",
            "deposit-reward",
            "--keypair",
            "/tmp/admin.json",
            "--handle",
            "gold",
            "--token",
            token_arg.as_str(),
            "--amount",
            "10000",
        ])
        .unwrap();
        let overrides = cli.command.overrides();
        assert_eq!(overrides.token, Some(token));
        assert_eq!(overrides.decimals, None);
        assert_eq!(overrides.env, None);

        let cli = Cli::try_parse_from([
            "staking-admin",
            "--verbose",
            "check-reward",
            "-H",
            "gold",
            "--url",
            "http://127.0.0.1:8899",
        ])
        .unwrap();
        assert!(cli.verbose);
        let overrides = cli.command.overrides();
        assert_eq!(overrides.url.as_deref(), Some("http://127.0.0.1:8899"));
        assert_eq!(overrides.keypair, None);
    }

    #[test]
    fn test_rejects_bad_input() {
        // handle is required
        assert!(Cli::try_parse_from(["staking-admin", "check-reward"]).is_err());
        // unknown env
        assert!(
            Cli::try_parse_from(["staking-admin", "check-reward", "-H", "gold", "-e", "mainnet"])
                .is_err()
        );
        // malformed mint
        assert!(Cli::try_parse_from([
            "staking-admin",
            "show-addresses",
            "-H",
            "gold",
            "-t",
            "xyz"
        ])
        .is_err());
        // check-reward never signs, so it takes no keypair
        assert!(Cli::try_parse_from([
            "staking-admin",
            "check-reward",
            "-H",
            "gold",
            "-k",
            "/tmp/admin.json"
        ])
        .is_err());
    }
}
