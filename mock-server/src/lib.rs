use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// A canned response served for one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default = "default_status")]
    pub status: u16,
    /// Raw response body. Not required to be valid JSON.
    pub body: String,
    #[serde(default)]
    pub delay_ms: u64,
}

fn default_status() -> u16 {
    200
}

impl Fixture {
    pub fn json(value: serde_json::Value) -> Self {
        Self::status(200, value)
    }

    pub fn status(status: u16, value: serde_json::Value) -> Self {
        Self {
            status,
            body: value.to_string(),
            delay_ms: 0,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay_ms = delay.as_millis() as u64;
        self
    }
}

/// Fixtures keyed by request target: either `path?query` or bare `path`.
pub type Fixtures = Arc<RwLock<HashMap<String, Fixture>>>;

/// Every request target the server has received, in arrival order.
pub type RequestLog = Arc<RwLock<Vec<String>>>;

#[derive(Clone, Default)]
pub struct MockState {
    pub fixtures: Fixtures,
    pub requests: RequestLog,
}

impl MockState {
    pub fn new(fixtures: HashMap<String, Fixture>) -> Self {
        Self {
            fixtures: Arc::new(RwLock::new(fixtures)),
            requests: RequestLog::default(),
        }
    }
}

/// Canned responses for the status endpoints, used by the binary when no
/// fixture file is given.
pub fn default_fixtures() -> HashMap<String, Fixture> {
    let mut fixtures = HashMap::new();
    fixtures.insert(
        "/api/v1/health".to_string(),
        Fixture::json(serde_json::json!({"status": "OK"})),
    );
    fixtures.insert(
        "/api/v1/ready".to_string(),
        Fixture::json(serde_json::json!({"ready": "OK"})),
    );
    fixtures.insert(
        "/api/v1/version".to_string(),
        Fixture::json(serde_json::json!({
            "build": "local",
            "branch": "main",
            "machine": "mock-server",
            "user": "mock"
        })),
    );
    fixtures.insert(
        "/v1/guardianset/current".to_string(),
        Fixture::json(serde_json::json!({
            "guardianSet": {"index": 4, "addresses": []}
        })),
    );
    fixtures
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/__requests", get(list_requests))
        .fallback(serve_fixture)
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn list_requests(State(state): State<MockState>) -> Json<Vec<String>> {
    Json(state.requests.read().await.clone())
}

async fn serve_fixture(State(state): State<MockState>, method: Method, uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    debug!(%method, %target, "serving request");
    state.requests.write().await.push(target.clone());

    let fixture = {
        let fixtures = state.fixtures.read().await;
        fixtures
            .get(&target)
            .or_else(|| fixtures.get(uri.path()))
            .cloned()
    };

    let Some(fixture) = fixture else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "not found"})),
        )
            .into_response();
    };

    if fixture.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(fixture.delay_ms)).await;
    }

    let status = StatusCode::from_u16(fixture.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        fixture.body,
    )
        .into_response()
}
