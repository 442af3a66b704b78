use ::config::TokenConfig;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level wallet client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chain RPC endpoint url
    pub rpc_url: String,

    /// Chain ID for EIP-155 replay protection
    pub chain_id: u64,

    /// Which wallet backend to connect through, by registry name
    /// ("local" or "bridge")
    pub wallet_backend: String,

    /// Wallet bridge url (required for the "bridge" backend)
    pub bridge_url: Option<String>,

    /// Account address the bridge signs for (required for the
    /// "bridge" backend)
    pub bridge_address: Option<Address>,

    /// Token being transferred; defaults to USDT with 6 decimals
    #[serde(default)]
    pub token: TokenConfig,

    /// Port for the Prometheus exporter; disabled when unset
    pub metrics_port: Option<u16>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }
}
