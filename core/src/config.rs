//! Client configuration: which Wormholescan deployment to talk to and how
//! long to wait for it.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAINNET_URL: &str = "https://api.wormholescan.io";
pub const TESTNET_URL: &str = "https://api.testnet.wormholescan.io";

/// Upper bound on the wait for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// A public Wormholescan deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn base_url(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_URL,
            Network::Testnet => TESTNET_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network: {0}")]
pub struct ParseNetworkError(String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

/// Settings shared by both API facades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL of the deployment, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

impl ClientConfig {
    pub fn new(network: Network) -> Self {
        Self::with_base_url(network.base_url())
    }

    /// Point at a custom deployment, e.g. a local mock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
