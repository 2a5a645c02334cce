use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

pub use error::StakingClientError;
pub use instructions::*;
pub use pda::PoolAddresses;
pub use state::*;

// Mainnet deployment. Account ownership checks in `#[account]` use this id.
declare_id!("GSA6YFJHtnPFKZUXjVH9uAQdJaPt3bWADDfbeduq9edJ");

/// Deployment used on every cluster other than mainnet-beta
pub mod devnet {
    anchor_lang::declare_id!("AVauy78yvW2K6QUfUSfPtcxPEaT3V6W1xwGEQQSFDAPC");
}

/// Program id for the target cluster
///
/// Mainnet-beta runs the production deployment; devnet, testnet, localnet
/// and custom RPC endpoints all talk to the development deployment.
pub fn program_id(is_mainnet: bool) -> Pubkey {
    if is_mainnet {
        ID
    } else {
        devnet::ID
    }
}
