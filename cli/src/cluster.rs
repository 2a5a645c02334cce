use anchor_client::Cluster;
use anchor_lang::prelude::Pubkey;
use clap::ValueEnum;
use serde::Deserialize;

/// Solana cluster the command talks to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Env {
    #[default]
    MainnetBeta,
    Testnet,
    Devnet,
    Localnet,
}

impl Env {
    pub fn is_mainnet(self) -> bool {
        self == Env::MainnetBeta
    }

    /// Production deployment on mainnet-beta, development deployment elsewhere
    pub fn program_id(self) -> Pubkey {
        chicks_staking_locked::program_id(self.is_mainnet())
    }

    /// Cluster for this env, or a custom endpoint when `url` is given
    pub fn cluster(self, url: Option<&str>) -> Cluster {
        if let Some(url) = url {
            return Cluster::Custom(url.to_string(), websocket_url(url));
        }
        match self {
            Env::MainnetBeta => Cluster::Mainnet,
            Env::Testnet => Cluster::Testnet,
            Env::Devnet => Cluster::Devnet,
            Env::Localnet => Cluster::Localnet,
        }
    }
}

fn websocket_url(rpc_url: &str) -> String {
    if let Some(rest) = rpc_url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = rpc_url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        rpc_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_id_follows_env() {
        assert_eq!(Env::MainnetBeta.program_id(), chicks_staking_locked::ID);
        for env in [Env::Devnet, Env::Testnet, Env::Localnet] {
            assert_eq!(env.program_id(), chicks_staking_locked::devnet::ID);
        }
    }

    #[test]
    fn test_cluster_urls() {
        assert_eq!(
            Env::MainnetBeta.cluster(None).url(),
            "https://api.mainnet-beta.solana.com"
        );
        assert_eq!(Env::Devnet.cluster(None).url(), "https://api.devnet.solana.com");

        let custom = Env::MainnetBeta.cluster(Some("https://rpc.example.com"));
        assert_eq!(custom.url(), "https://rpc.example.com");
        assert_eq!(custom.ws_url(), "wss://rpc.example.com");
    }

    #[test]
    fn test_env_names() {
        assert_eq!(
            Env::from_str("mainnet-beta", false).unwrap(),
            Env::MainnetBeta
        );
        assert_eq!(Env::from_str("devnet", false).unwrap(), Env::Devnet);
        assert!(Env::from_str("mainnet", false).is_err());
    }
}
