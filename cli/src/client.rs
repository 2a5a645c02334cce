// src/client.rs - Wallet loading and program client construction

use std::path::Path;
use std::rc::Rc;

use anchor_client::solana_sdk::commitment_config::CommitmentConfig;
use anchor_client::solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use anchor_client::{Client, Program};
use anchor_lang::prelude::Pubkey;
use anyhow::{anyhow, Context, Result};
use chicks_staking_locked::{PoolAddresses, StakingAccountV3};
use log::{debug, info};

use crate::config::Settings;

/// Reads a Solana CLI keypair file (JSON array of 64 bytes).
pub fn load_wallet(path: &Path) -> Result<Keypair> {
    read_keypair_file(path)
        .map_err(|e| anyhow!("failed to read keypair {}: {}", path.display(), e))
}

/// Program handle plus the derived addresses of one pool
pub struct StakingClient {
    program: Program<Rc<Keypair>>,
    payer: Pubkey,
    pub pool: PoolAddresses,
}

impl StakingClient {
    /// Connects as `payer` to the deployment selected by `settings.env`
    pub fn connect(settings: &Settings, payer: Keypair, handle: &str) -> Result<Self> {
        let program_id = settings.program_id();
        let pool = PoolAddresses::derive(&program_id, &settings.token, handle)?;
        let cluster = settings.env.cluster(settings.url.as_deref());
        info!(
            "cluster {} ({:?}), program {}, pool '{}'",
            cluster.url(),
            settings.env,
            program_id,
            pool.handle
        );
        debug!(
            "vault {} (bump {}), staking_v3 {} (bump {}), staking_v2 {} (bump {})",
            pool.vault,
            pool.vault_bump,
            pool.staking_v3,
            pool.staking_v3_bump,
            pool.staking_v2,
            pool.staking_v2_bump
        );

        let payer = Rc::new(payer);
        let payer_key = payer.pubkey();
        let client = Client::new_with_options(cluster, payer, CommitmentConfig::confirmed());
        let program = client
            .program(program_id)
            .context("failed to build program client")?;

        Ok(Self {
            program,
            payer: payer_key,
            pool,
        })
    }

    /// Connects with the wallet from `settings`, for commands that sign
    pub fn connect_signer(settings: &Settings, handle: &str) -> Result<Self> {
        let wallet = load_wallet(settings.require_keypair()?)?;
        Self::connect(settings, wallet, handle)
    }

    /// Connects with a throwaway keypair, for read-only commands
    pub fn connect_readonly(settings: &Settings, handle: &str) -> Result<Self> {
        Self::connect(settings, Keypair::new(), handle)
    }

    pub fn payer(&self) -> Pubkey {
        self.payer
    }

    pub fn program(&self) -> &Program<Rc<Keypair>> {
        &self.program
    }

    pub fn fetch_staking_v3(&self) -> Result<StakingAccountV3> {
        self.program
            .account::<StakingAccountV3>(self.pool.staking_v3)
            .with_context(|| {
                format!(
                    "failed to fetch staking account {} for pool '{}'",
                    self.pool.staking_v3, self.pool.handle
                )
            })
    }
}
