//! SDK configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solana cluster the SDK talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
    Localnet,
}

impl Cluster {
    /// Faucet airdrops only exist off mainnet
    pub fn airdrops_enabled(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
            Cluster::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            other => Err(format!("unknown cluster: {other}")),
        }
    }
}

/// Configuration for the RPC ledger client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
    pub rpc_url: String,
    pub cluster: Cluster,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            rpc_url: Cluster::Devnet.default_rpc_url().to_string(),
            cluster: Cluster::Devnet,
        }
    }
}
