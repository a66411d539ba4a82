use std::collections::HashMap;

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, default_fixtures, Fixture, MockState};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn state_with(route: &str, fixture: Fixture) -> MockState {
    let mut fixtures = HashMap::new();
    fixtures.insert(route.to_string(), fixture);
    MockState::new(fixtures)
}

// --- fixtures ---

#[tokio::test]
async fn serves_default_health_fixture() {
    let resp = app(MockState::new(default_fixtures()))
        .oneshot(get("/api/v1/health"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"status": "OK"}));
}

#[tokio::test]
async fn unknown_route_returns_404_json() {
    let resp = app(MockState::default())
        .oneshot(get("/api/v1/nothing-here"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"error": "not found"}));
}

#[tokio::test]
async fn fixture_status_is_replayed() {
    let state = state_with(
        "/api/v1/scorecards",
        Fixture::status(503, serde_json::json!({"error": "unavailable"})),
    );
    let resp = app(state).oneshot(get("/api/v1/scorecards")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn raw_body_is_served_verbatim() {
    let state = state_with("/api/v1/version", Fixture::raw(200, "not json"));
    let resp = app(state).oneshot(get("/api/v1/version")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"not json");
}

// --- route matching ---

#[tokio::test]
async fn exact_query_fixture_wins_over_path() {
    let mut fixtures = HashMap::new();
    fixtures.insert(
        "/api/v1/last-txs".to_string(),
        Fixture::json(serde_json::json!({"match": "path"})),
    );
    fixtures.insert(
        "/api/v1/last-txs?timeSpan=1d&sampleRate=1h".to_string(),
        Fixture::json(serde_json::json!({"match": "query"})),
    );
    let router = app(MockState::new(fixtures));

    let resp = router
        .clone()
        .oneshot(get("/api/v1/last-txs?timeSpan=1d&sampleRate=1h"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["match"], "query");

    let resp = router
        .oneshot(get("/api/v1/last-txs?timeSpan=1w&sampleRate=1d"))
        .await
        .unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["match"], "path");
}

// --- request log ---

#[tokio::test]
async fn requests_are_recorded_in_order() {
    let state = MockState::new(default_fixtures());
    let router = app(state.clone());

    router.clone().oneshot(get("/api/v1/health")).await.unwrap();
    router
        .clone()
        .oneshot(get("/api/v1/vaas/?page=0&pageSize=10"))
        .await
        .unwrap();

    assert_eq!(
        *state.requests.read().await,
        vec![
            "/api/v1/health".to_string(),
            "/api/v1/vaas/?page=0&pageSize=10".to_string()
        ]
    );

    let resp = router.oneshot(get("/__requests")).await.unwrap();
    let log: Vec<String> = body_json(resp).await;
    assert_eq!(log.len(), 2);
}
