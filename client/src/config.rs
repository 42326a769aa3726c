//! Solana CLI configuration: RPC endpoint, payer keypair and the optional
//! default target identity.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};

use crate::logs::log_warning;

pub const LOCALHOST_RPC_URL: &str = "http://localhost:8899";

/// Subset of `~/.config/solana/cli/config.yml` this client reads.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub json_rpc_url: Option<String>,
    #[serde(default)]
    pub keypair_path: Option<String>,
    /// Target identity used when a command does not name one.
    #[serde(default)]
    pub roster_target: Option<String>,
}

impl CliConfig {
    /// Loads the Solana CLI config file, falling back to an empty config
    /// when it is missing or unreadable.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                log_warning("Config", format!("{err:#}; using defaults"));
                Self::default()
            }
        }
    }

    fn try_load() -> anyhow::Result<Self> {
        let path = Self::default_path().context("No home directory")?;
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&raw).context("Failed to parse the Solana CLI config")
    }

    /// `~/.config/solana/cli/config.yml`.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".config/solana/cli/config.yml"))
    }

    pub fn rpc_url(&self) -> String {
        match &self.json_rpc_url {
            Some(url) => url.clone(),
            None => {
                log_warning("Config", "no RPC url configured; using localhost");
                LOCALHOST_RPC_URL.to_string()
            }
        }
    }

    /// Loads the configured keypair, or generates an ephemeral one when
    /// none is configured or the file is unreadable.
    pub fn payer(&self) -> Keypair {
        let Some(path) = &self.keypair_path else {
            log_warning("Config", "no keypair configured; using an ephemeral one");
            return Keypair::new();
        };
        match read_keypair_file(path) {
            Ok(keypair) => keypair,
            Err(err) => {
                log_warning(
                    "Config",
                    format!("failed to read keypair at {path}: {err}; using an ephemeral one"),
                );
                Keypair::new()
            }
        }
    }

    /// The configured default target, when present.
    pub fn default_target(&self) -> anyhow::Result<Option<Pubkey>> {
        self.roster_target
            .as_deref()
            .filter(|target| !target.is_empty())
            .map(|target| {
                target
                    .parse::<Pubkey>()
                    .with_context(|| format!("Configured target {target} is not a valid identity"))
            })
            .transpose()
    }
}
