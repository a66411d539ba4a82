//! Blocking client for the Wormholescan API.
//!
//! # Overview
//! Two facades cover the remote surface: `GuardianApi` for the
//! guardian-facing `/v1` endpoints and `ExplorerApi` for the explorer's
//! `/api/v1` endpoints. Each method builds a URL with `build_url`, performs
//! one GET through `RequestExecutor` and returns the decoded JSON body
//! unchanged.
//!
//! # Design
//! - Facades hold only an immutable base URL and an executor; no state is
//!   shared between calls.
//! - Optional query parameters are typed option structs (`types`) rather
//!   than free-form maps.
//! - Failures surface as `ApiError`: `Timeout`, `ConnectionFailure`,
//!   `HttpStatus`, `Decode`, or `Transport` for anything else.

pub mod config;
pub mod error;
pub mod explorer;
pub mod guardian;
pub mod http;
pub mod types;
pub mod url;

pub use config::{ClientConfig, Network, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use explorer::ExplorerApi;
pub use guardian::GuardianApi;
pub use http::{parse_response, HttpMethod, HttpResponse, RequestExecutor};
pub use types::{
    OperationsQuery, Pagination, SortOrder, ToQuery, TransactionsQuery, VaasByEmitterQuery,
    VaasQuery, XChainActivityQuery, XChainTopsQuery,
};
pub use url::{build_url, to_camel_case, QueryParams, QueryValue};
