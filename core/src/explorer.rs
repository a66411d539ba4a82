//! Explorer API (`/api/v1`).
//!
//! # Design
//! `ExplorerApi` holds the deployment root and a `RequestExecutor`. Every
//! method substitutes its path parameters, turns its options into query
//! parameters and returns the decoded JSON body as-is. Path parameters are
//! inserted verbatim.

use serde_json::Value;

use crate::config::{ClientConfig, Network};
use crate::error::ApiError;
use crate::http::RequestExecutor;
use crate::types::{
    OperationsQuery, Pagination, ToQuery, TransactionsQuery, VaasByEmitterQuery, VaasQuery,
    XChainActivityQuery, XChainTopsQuery,
};
use crate::url::{build_url, QueryParams};

const API_PREFIX: &str = "/api/v1";

/// Client for the Wormholescan explorer endpoints.
#[derive(Debug, Clone)]
pub struct ExplorerApi {
    root_url: String,
    api_url: String,
    executor: RequestExecutor,
}

impl Default for ExplorerApi {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

impl ExplorerApi {
    pub fn new(network: Network) -> Self {
        Self::with_config(ClientConfig::new(network))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            api_url: format!("{}{API_PREFIX}", config.base_url),
            root_url: config.base_url,
            executor: RequestExecutor::new(config.timeout),
        }
    }

    /// Deployment root, e.g. `https://api.wormholescan.io`.
    pub fn base_url(&self) -> &str {
        &self.root_url
    }

    fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.executor.execute(&build_url(&self.api_url, path, None))
    }

    fn get_with(&self, path: &str, params: &QueryParams) -> Result<Value, ApiError> {
        self.executor
            .execute(&build_url(&self.api_url, path, Some(params)))
    }

    // -----------------------------------------------------------------------
    // Address
    // -----------------------------------------------------------------------

    /// Look up an address.
    pub fn address(&self, address: &str, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with(&format!("/address/{address}"), &pagination.to_query())
    }

    // -----------------------------------------------------------------------
    // Global transactions
    // -----------------------------------------------------------------------

    /// Origin and destination transactions for the VAA `chain/emitter/seq`.
    /// Only an origin transaction is present when the VAA was not redeemed.
    pub fn global_transaction(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/global-tx/{chain}/{emitter}/{seq}"))
    }

    // -----------------------------------------------------------------------
    // Governor
    // -----------------------------------------------------------------------

    pub fn governor_config(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/governor/config", &pagination.to_query())
    }

    pub fn governor_config_by_guardian_address(&self, guardian_address: &str) -> Result<Value, ApiError> {
        self.get(&format!("/governor/config/{guardian_address}"))
    }

    /// Enqueued VAAs for each chain.
    pub fn governor_enqueued_vaas(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/governor/enqueued_vaas/", &pagination.to_query())
    }

    pub fn governor_enqueued_vaas_by_chain(
        &self,
        chain: u16,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/governor/enqueued_vaas/{chain}"), &pagination.to_query())
    }

    pub fn governor_limit(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/governor/limit", &pagination.to_query())
    }

    pub fn governor_notional_available(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/governor/notional/available", &pagination.to_query())
    }

    pub fn governor_notional_available_by_chain(
        &self,
        chain: u16,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/governor/notional/available/{chain}"), &pagination.to_query())
    }

    pub fn governor_notional_limit(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/governor/notional/limit", &pagination.to_query())
    }

    pub fn governor_notional_limit_by_chain(
        &self,
        chain: u16,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/governor/notional/limit/{chain}"), &pagination.to_query())
    }

    pub fn governor_max_notional_available_by_chain(&self, chain: u16) -> Result<Value, ApiError> {
        self.get(&format!("/governor/notional/max_available/{chain}"))
    }

    pub fn governor_status(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/governor/status", &pagination.to_query())
    }

    pub fn governor_status_by_guardian_address(
        &self,
        guardian_address: &str,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/governor/status/{guardian_address}"), &pagination.to_query())
    }

    // -----------------------------------------------------------------------
    // Service status
    // -----------------------------------------------------------------------

    pub fn health(&self) -> Result<Value, ApiError> {
        self.get("/health")
    }

    pub fn ready(&self) -> Result<Value, ApiError> {
        self.get("/ready")
    }

    pub fn version(&self) -> Result<Value, ApiError> {
        self.get("/version")
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Transaction counts over `time_span` (`1d`, `1w`, `1mo`; default `1d`)
    /// sampled every `sample_rate` (`1h`, `1d`; default `1h`). Valid pairs are
    /// 1d/1h, 1w/1d and 1mo/1d.
    pub fn last_transactions(
        &self,
        time_span: Option<&str>,
        sample_rate: Option<&str>,
    ) -> Result<Value, ApiError> {
        let params = QueryParams::new()
            .with("time_span", time_span.unwrap_or("1d"))
            .with("sample_rate", sample_rate.unwrap_or("1h"));
        self.get_with("/last-txs", &params)
    }

    pub fn protocol_stats(&self) -> Result<Value, ApiError> {
        self.get("/protocols/stats")
    }

    /// Token bridge TVL, all-time and 24h volume, and message counts.
    pub fn scorecards(&self) -> Result<Value, ApiError> {
        self.get("/scorecards")
    }

    /// Top 100 corridors by transaction count over `time_span` (`2d` or `7d`;
    /// default `2d`).
    pub fn top_100_corridors(&self, time_span: Option<&str>) -> Result<Value, ApiError> {
        let params = QueryParams::new().with("time_span", time_span.unwrap_or("2d"));
        self.get_with("/top-100-corridors", &params)
    }

    /// Emitter chain and asset pairs ordered by volume over `time_span`
    /// (`7d`, `15d`, `30d`).
    pub fn top_assets_by_volume(&self, time_span: &str) -> Result<Value, ApiError> {
        self.get_with("/top-assets-by-volume", &QueryParams::new().with("time_span", time_span))
    }

    pub fn top_chain_pairs_by_num_transfers(&self, time_span: &str) -> Result<Value, ApiError> {
        self.get_with(
            "/top-chain-pairs-by-num-transfers",
            &QueryParams::new().with("time_span", time_span),
        )
    }

    /// Symbols ordered by volume over `time_span` (`7d`, `15d`, `30d`;
    /// default `7d`).
    pub fn top_symbols_by_volume(&self, time_span: Option<&str>) -> Result<Value, ApiError> {
        let params = QueryParams::new().with("time_span", time_span.unwrap_or("7d"));
        self.get_with("/top-symbols-by-volume", &params)
    }

    /// Chain pairs by origin and destination, by notional or tx count.
    pub fn x_chain_activity(&self, query: &XChainActivityQuery) -> Result<Value, ApiError> {
        self.get_with("/x-chain-activity", &query.to_query())
    }

    pub fn x_chain_activity_tops(&self, query: &XChainTopsQuery) -> Result<Value, ApiError> {
        self.get_with("/x-chain-activity/tops", &query.to_query())
    }

    // -----------------------------------------------------------------------
    // Observations
    // -----------------------------------------------------------------------

    /// All observations, newest first.
    pub fn observations(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with("/observations", &pagination.to_query())
    }

    pub fn observations_by_chain(&self, chain: u16, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with(&format!("/observations/{chain}"), &pagination.to_query())
    }

    pub fn observations_by_emitter(
        &self,
        chain: u16,
        emitter: &str,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/observations/{chain}/{emitter}"), &pagination.to_query())
    }

    pub fn observations_by_sequence(
        &self,
        chain: u16,
        emitter: &str,
        seq: u64,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/observations/{chain}/{emitter}/{seq}"), &pagination.to_query())
    }

    /// A single observation made by `signer` with digest `hash`.
    pub fn observation_by_id(
        &self,
        chain: u16,
        emitter: &str,
        seq: u64,
        signer: &str,
        hash: &str,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.get_with(
            &format!("/observations/{chain}/{emitter}/{seq}/{signer}/{hash}"),
            &pagination.to_query(),
        )
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    pub fn operations(&self, query: &OperationsQuery) -> Result<Value, ApiError> {
        self.get_with("/operations", &query.to_query())
    }

    pub fn operation_by_id(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/operations/{chain}/{emitter}/{seq}"))
    }

    // -----------------------------------------------------------------------
    // Relays and tokens
    // -----------------------------------------------------------------------

    pub fn relay_by_vaa_id(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/relays/{chain}/{emitter}/{seq}"))
    }

    /// Symbol, CoinGecko id and address of a token.
    pub fn token_by_chain_and_address(&self, chain: u16, token_address: &str) -> Result<Value, ApiError> {
        self.get(&format!("/token/{chain}/{token_address}"))
    }

    // -----------------------------------------------------------------------
    // Transactions
    // -----------------------------------------------------------------------

    pub fn transactions(&self, query: &TransactionsQuery) -> Result<Value, ApiError> {
        self.get_with("/transactions/", &query.to_query())
    }

    pub fn transaction_by_id(&self, chain: u16, emitter: &str, seq: u64) -> Result<Value, ApiError> {
        self.get(&format!("/transactions/{chain}/{emitter}/{seq}"))
    }

    // -----------------------------------------------------------------------
    // VAAs
    // -----------------------------------------------------------------------

    pub fn vaas(&self, query: &VaasQuery) -> Result<Value, ApiError> {
        self.get_with("/vaas/", &query.to_query())
    }

    pub fn vaas_by_chain(&self, chain: u16, pagination: &Pagination) -> Result<Value, ApiError> {
        self.get_with(&format!("/vaas/{chain}"), &pagination.to_query())
    }

    pub fn vaas_by_emitter(
        &self,
        chain: u16,
        emitter: &str,
        query: &VaasByEmitterQuery,
    ) -> Result<Value, ApiError> {
        self.get_with(&format!("/vaas/{chain}/{emitter}"), &query.to_query())
    }

    pub fn vaa_by_id(
        &self,
        chain: u16,
        emitter: &str,
        seq: u64,
        parsed_payload: Option<bool>,
    ) -> Result<Value, ApiError> {
        let mut params = QueryParams::new();
        params.push_opt("parsed_payload", parsed_payload);
        self.get_with(&format!("/vaas/{chain}/{emitter}/{seq}"), &params)
    }

    /// Total VAAs emitted per chain.
    pub fn vaa_counts(&self) -> Result<Value, ApiError> {
        self.get("/vaas/vaa-counts")
    }

    // -----------------------------------------------------------------------
    // Swagger
    // -----------------------------------------------------------------------

    /// The API's swagger document, served outside `/api/v1`.
    pub fn swagger(&self) -> Result<Value, ApiError> {
        self.executor
            .execute(&build_url(&self.root_url, "/swagger.json", None))
    }
}
