//! Request executor against the live mock server: success, each failure
//! kind, and the per-call method and timeout overrides.

mod common;

use std::time::Duration;

use mock_server::Fixture;
use serde_json::json;
use wormholescan::{ApiError, HttpMethod, RequestExecutor};

#[test]
fn ok_response_is_returned_unchanged() {
    let server = common::start(vec![("/api/v1/health", Fixture::json(json!({"status": "OK"})))]);

    let value = RequestExecutor::default()
        .execute(&format!("{}/api/v1/health", server.base_url))
        .unwrap();

    assert_eq!(value, json!({"status": "OK"}));
    assert_eq!(server.requests(), vec!["/api/v1/health"]);
}

#[test]
fn not_found_is_http_status_error() {
    let server = common::start(vec![(
        "/api/v1/health",
        Fixture::status(404, json!({"error": "not found"})),
    )]);
    let url = format!("{}/api/v1/health", server.base_url);

    let err = RequestExecutor::default().execute(&url).unwrap_err();

    match err {
        ApiError::HttpStatus { status, message, body } => {
            assert_eq!(status, 404);
            assert_eq!(message, format!("404 Client Error: Not Found for url: {url}"));
            assert_eq!(body, r#"{"error":"not found"}"#);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn server_error_is_http_status_error() {
    let server = common::start(vec![(
        "/api/v1/scorecards",
        Fixture::status(500, json!({"error": "boom"})),
    )]);

    let err = RequestExecutor::default()
        .execute(&format!("{}/api/v1/scorecards", server.base_url))
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().starts_with("HTTPError: 500 Server Error: Internal Server Error"));
}

#[test]
fn slow_response_times_out() {
    let server = common::start(vec![(
        "/api/v1/health",
        Fixture::json(json!({"status": "OK"})).delayed(Duration::from_secs(3)),
    )]);

    let err = RequestExecutor::new(Duration::from_millis(200))
        .execute(&format!("{}/api/v1/health", server.base_url))
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout), "got {err:?}");
    assert_eq!(err.to_string(), "Timeout error occurred.");
}

#[test]
fn per_call_timeout_overrides_default() {
    let server = common::start(vec![(
        "/api/v1/health",
        Fixture::json(json!({"status": "OK"})).delayed(Duration::from_secs(3)),
    )]);
    let url = format!("{}/api/v1/health", server.base_url);

    let err = RequestExecutor::default()
        .execute_with(&url, HttpMethod::Get, Duration::from_millis(200))
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout), "got {err:?}");
}

#[test]
fn refused_connection_is_connection_failure() {
    let url = format!("{}/api/v1/health", common::closed_port_url());

    let err = RequestExecutor::new(Duration::from_secs(5))
        .execute(&url)
        .unwrap_err();

    assert!(matches!(err, ApiError::ConnectionFailure), "got {err:?}");
    assert_eq!(err.to_string(), "Connection error occurred.");
}

#[test]
fn non_json_body_is_decode_error() {
    let server = common::start(vec![("/api/v1/version", Fixture::raw(200, "<html>oops</html>"))]);

    let err = RequestExecutor::default()
        .execute(&format!("{}/api/v1/version", server.base_url))
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

const ELEVEN_MIB: usize = 11 * 1024 * 1024;

#[test]
fn large_success_body_is_decoded() {
    let data = "a".repeat(ELEVEN_MIB);
    let body = format!(r#"{{"data":"{data}"}}"#);
    let server = common::start(vec![("/api/v1/vaas/", Fixture::raw(200, &body))]);

    let value = RequestExecutor::default()
        .execute(&format!("{}/api/v1/vaas/", server.base_url))
        .unwrap();

    assert_eq!(value["data"].as_str().map(str::len), Some(ELEVEN_MIB));
}

#[test]
fn large_error_body_keeps_http_status() {
    let body = "e".repeat(ELEVEN_MIB);
    let server = common::start(vec![("/api/v1/vaas/", Fixture::raw(500, &body))]);

    let err = RequestExecutor::default()
        .execute(&format!("{}/api/v1/vaas/", server.base_url))
        .unwrap_err();

    match err {
        ApiError::HttpStatus { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), ELEVEN_MIB);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn other_methods_are_sent() {
    let server = common::start(vec![("/api/v1/vaas/parse", Fixture::json(json!({"parsed": true})))]);
    let url = format!("{}/api/v1/vaas/parse", server.base_url);

    let value = RequestExecutor::default()
        .execute_with(&url, HttpMethod::Post, Duration::from_secs(5))
        .unwrap();

    assert_eq!(value, json!({"parsed": true}));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn each_call_is_one_request() {
    let server = common::start(vec![("/api/v1/ready", Fixture::json(json!({"ready": "OK"})))]);
    let executor = RequestExecutor::default();
    let url = format!("{}/api/v1/ready", server.base_url);

    executor.execute(&url).unwrap();
    executor.execute(&url).unwrap();

    assert_eq!(server.requests(), vec!["/api/v1/ready", "/api/v1/ready"]);
}
