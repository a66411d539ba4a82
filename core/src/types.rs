//! Typed query options for the explorer endpoints.
//!
//! # Design
//! Every optional query parameter the API recognizes is a field here. Unset
//! fields are left out of the URL. Keys are produced in snake_case and
//! camel-cased by `build_url`, so field names read the same as the remote
//! parameter names (`page_size` → `pageSize`).

use std::fmt;

use crate::url::{QueryParams, QueryValue};

/// Converts an options value into ordered query parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

/// Sort direction for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("ASC"),
            SortOrder::Desc => f.write_str("DESC"),
        }
    }
}

impl From<SortOrder> for QueryValue {
    fn from(order: SortOrder) -> Self {
        QueryValue::Str(order.to_string())
    }
}

/// `page`, `pageSize` and `sortOrder`, shared by most listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page number, starting at 0.
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_order: Option<SortOrder>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    fn push_into(&self, params: &mut QueryParams) {
        params
            .push_opt("page", self.page)
            .push_opt("page_size", self.page_size)
            .push_opt("sort_order", self.sort_order);
    }
}

impl ToQuery for Pagination {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.push_into(&mut params);
        params
    }
}

/// Filters for `/operations`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationsQuery {
    /// Emitter or sender address.
    pub address: Option<String>,
    pub tx_hash: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ToQuery for OperationsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("address", self.address.as_deref())
            .push_opt("tx_hash", self.tx_hash.as_deref())
            .push_opt("page", self.page)
            .push_opt("page_size", self.page_size);
        params
    }
}

/// Filters for `/transactions/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsQuery {
    pub pagination: Pagination,
    pub address: Option<String>,
}

impl ToQuery for TransactionsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = self.pagination.to_query();
        params.push_opt("address", self.address.as_deref());
        params
    }
}

/// Filters for `/vaas/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaasQuery {
    pub pagination: Pagination,
    pub tx_hash: Option<String>,
    /// Include the parsed VAA payload when available.
    pub parsed_payload: Option<bool>,
    pub app_id: Option<String>,
}

impl ToQuery for VaasQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = self.pagination.to_query();
        params
            .push_opt("tx_hash", self.tx_hash.as_deref())
            .push_opt("parsed_payload", self.parsed_payload)
            .push_opt("app_id", self.app_id.as_deref());
        params
    }
}

/// Filters for `/vaas/:chain/:emitter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaasByEmitterQuery {
    /// Destination chain.
    pub to_chain: Option<u16>,
    pub pagination: Pagination,
}

impl ToQuery for VaasByEmitterQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("to_chain", self.to_chain);
        self.pagination.push_into(&mut params);
        params
    }
}

/// Options for `/x-chain-activity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XChainActivityQuery {
    /// One of `7d`, `30d`, `90d`, `1y`, `all-time`.
    pub time_span: String,
    /// `notional` or `tx`.
    pub by: String,
    /// Comma-separated app list; all apps when unset.
    pub apps: Option<String>,
}

impl Default for XChainActivityQuery {
    fn default() -> Self {
        Self {
            time_span: "7d".to_string(),
            by: "notional".to_string(),
            apps: None,
        }
    }
}

impl ToQuery for XChainActivityQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new()
            .with("time_span", self.time_span.as_str())
            .with("by", self.by.as_str());
        params.push_opt("apps", self.apps.as_deref());
        params
    }
}

/// Options for `/x-chain-activity/tops`. All fields are required by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XChainTopsQuery {
    pub time_span: String,
    /// RFC 3339 start of the window.
    pub from: String,
    /// RFC 3339 end of the window.
    pub to: String,
}

impl ToQuery for XChainTopsQuery {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("time_span", self.time_span.as_str())
            .with("from", self.from.as_str())
            .with("to", self.to.as_str())
    }
}
