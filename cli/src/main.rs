// src/main.rs - Staking pool admin CLI entry point

pub mod cli;
pub mod client;
pub mod cluster;
pub mod commands;
pub mod config;
pub mod format;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let file = config::load(cli.config.as_deref())?;
    commands::run(cli.command, &file)
}
