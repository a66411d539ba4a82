//! Guardian-facing API (`/v1`).
//!
//! These endpoints mirror the guardian node's public API, served from the
//! explorer's aggregated view of all guardians.

use serde_json::Value;

use crate::config::{ClientConfig, Network};
use crate::error::ApiError;
use crate::http::RequestExecutor;
use crate::url::build_url;

/// Client for the guardian-facing endpoints.
#[derive(Debug, Clone)]
pub struct GuardianApi {
    base_url: String,
    executor: RequestExecutor,
}

impl Default for GuardianApi {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

impl GuardianApi {
    pub fn new(network: Network) -> Self {
        Self::with_config(ClientConfig::new(network))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            base_url: format!("{}/v1", config.base_url),
            executor: RequestExecutor::new(config.timeout),
        }
    }

    /// Prefix every path is appended to, e.g. `https://api.wormholescan.io/v1`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.executor.execute(&build_url(&self.base_url, path, None))
    }

    /// Available notional per chain. The explorer reports, for each chain,
    /// the smallest `remainingAvailableNotional` across all guardians.
    pub fn available_notional_by_chain(&self) -> Result<Value, ApiError> {
        self.get("/governor/available_notional_by_chain")
    }

    pub fn enqueued_vaas(&self) -> Result<Value, ApiError> {
        self.get("/governor/enqueued_vaas")
    }

    /// Whether the VAA `chain/emitter/seq` is held by the governor.
    pub fn is_vaa_enqueued(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/governor/is_vaa_enqueued/{chain}/{emitter}/{seq}"))
    }

    /// Tokens tracked by the governor, with their price.
    pub fn token_list(&self) -> Result<Value, ApiError> {
        self.get("/governor/token_list")
    }

    /// Current guardian set.
    pub fn guardian_set(&self) -> Result<Value, ApiError> {
        self.get("/guardianset/current")
    }

    pub fn heartbeats(&self) -> Result<Value, ApiError> {
        self.get("/heartbeats")
    }

    pub fn signed_batch_vaa(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/signed_batch_vaa/{chain}/{emitter}/{seq}"))
    }

    pub fn signed_vaa(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/signed_vaa/{chain}/{emitter}/{seq}"))
    }
}
