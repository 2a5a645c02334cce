// src/config.rs - Optional operator defaults, merged under command-line flags

use std::path::{Path, PathBuf};

use anchor_lang::prelude::Pubkey;
use anyhow::{anyhow, Context, Result};
use chicks_staking_locked::constants::{CHICKS_DECIMALS, CHICKS_TOKEN_ADDRESS};
use serde::Deserialize;

use crate::cluster::Env;

/// Contents of the optional TOML config file. Every key may be omitted.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub env: Option<Env>,
    pub url: Option<String>,
    pub keypair: Option<PathBuf>,
    pub token: Option<String>,
    pub decimals: Option<u8>,
}

/// Loads the config file, if one was given.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let builder = config::Config::builder().add_source(config::File::from(path));
    let cfg: FileConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .with_context(|| format!("failed to load config {}", path.display()))?;
    log::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}

/// Values given on the command line for a single command
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub env: Option<Env>,
    pub url: Option<String>,
    pub keypair: Option<PathBuf>,
    pub token: Option<Pubkey>,
    pub decimals: Option<u8>,
}

/// Effective settings: flags, then config file, then built-in defaults
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub env: Env,
    pub url: Option<String>,
    pub keypair: Option<PathBuf>,
    pub token: Pubkey,
    pub decimals: u8,
}

impl Settings {
    pub fn resolve(file: &FileConfig, overrides: Overrides) -> Result<Self> {
        let token = match (overrides.token, file.token.as_deref()) {
            (Some(token), _) => token,
            (None, Some(token)) => token
                .parse()
                .with_context(|| format!("invalid token address in config: {token}"))?,
            (None, None) => CHICKS_TOKEN_ADDRESS.parse()?,
        };

        Ok(Self {
            env: overrides.env.or(file.env).unwrap_or_default(),
            url: overrides.url.or_else(|| file.url.clone()),
            keypair: overrides.keypair.or_else(|| file.keypair.clone()),
            token,
            decimals: overrides
                .decimals
                .or(file.decimals)
                .unwrap_or(CHICKS_DECIMALS),
        })
    }

    /// Wallet path for commands that sign
    pub fn require_keypair(&self) -> Result<&Path> {
        self.keypair
            .as_deref()
            .ok_or_else(|| anyhow!("no wallet: pass --keypair or set `keypair` in the config file"))
    }

    pub fn program_id(&self) -> Pubkey {
        self.env.program_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let file = load(None).unwrap();
        assert_eq!(file, FileConfig::default());

        let settings = Settings::resolve(&file, Overrides::default()).unwrap();
        assert_eq!(settings.env, Env::MainnetBeta);
        assert_eq!(settings.token.to_string(), CHICKS_TOKEN_ADDRESS);
        assert_eq!(settings.decimals, 9);
        assert_eq!(settings.url, None);
        assert!(settings.require_keypair().is_err());
    }

    #[test]
    fn test_file_values_apply() {
        let tmp = write_config(
            r#"
env = "devnet"
keypair = "/tmp/admin.json"
decimals = 6
"#,
        );
        let file = load(Some(tmp.path())).unwrap();
        let settings = Settings::resolve(&file, Overrides::default()).unwrap();

        assert_eq!(settings.env, Env::Devnet);
        assert_eq!(settings.decimals, 6);
        assert_eq!(
            settings.require_keypair().unwrap(),
            Path::new("/tmp/admin.json")
        );
        assert_eq!(settings.program_id(), chicks_staking_locked::devnet::ID);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            env: Some(Env::Devnet),
            url: Some("http://127.0.0.1:8899".to_string()),
            keypair: Some(PathBuf::from("/tmp/file.json")),
            token: Some(Pubkey::new_unique().to_string()),
            decimals: Some(6),
        };
        let token = Pubkey::new_unique();
        let overrides = Overrides {
            env: Some(Env::MainnetBeta),
            url: None,
            keypair: Some(PathBuf::from("/tmp/flag.json")),
            token: Some(token),
            decimals: Some(9),
        };
        let settings = Settings::resolve(&file, overrides).unwrap();

        assert_eq!(settings.env, Env::MainnetBeta);
        // Not given on the command line, so the file value stands
        assert_eq!(settings.url.as_deref(), Some("http://127.0.0.1:8899"));
        assert_eq!(settings.keypair, Some(PathBuf::from("/tmp/flag.json")));
        assert_eq!(settings.token, token);
        assert_eq!(settings.decimals, 9);
    }

    #[test]
    fn test_bad_inputs() {
        let file = FileConfig {
            token: Some("not-a-pubkey".to_string()),
            ..FileConfig::default()
        };
        assert!(Settings::resolve(&file, Overrides::default()).is_err());

        let tmp = write_config("env = \"moonnet\"\n");
        assert!(load(Some(tmp.path())).is_err());

        assert!(load(Some(Path::new("/nonexistent/staking-admin.toml"))).is_err());
    }
}
