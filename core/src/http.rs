//! Blocking request execution and response interpretation.
//!
//! # Design
//! `RequestExecutor` performs exactly one round-trip per call through a
//! ureq agent and hands the completed exchange, as a plain `HttpResponse`,
//! to `parse_response`. The agent is configured to return 4xx/5xx responses
//! as data so that status interpretation lives in one pure function that
//! can be tested without a network.
//!
//! There are no retries. Connection reuse is whatever the ureq agent does
//! on its own.

use std::fmt;
use std::io;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DEFAULT_TIMEOUT;
use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A completed HTTP exchange described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The URL the request was sent to.
    pub url: String,
    pub status: u16,
    /// Canonical reason phrase for `status`, empty when unknown.
    pub reason: String,
    pub body: String,
}

/// Interpret a completed exchange: 4xx/5xx become `HttpStatus`, anything
/// else is decoded as JSON and returned unchanged.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status < 400 {
        return Ok(());
    }
    let kind = if response.status < 500 { "Client" } else { "Server" };
    let message = format!(
        "{} {kind} Error: {} for url: {}",
        response.status, response.reason, response.url
    );
    warn!(status = response.status, url = %response.url, "request failed with error status");
    Err(ApiError::HttpStatus {
        status: response.status,
        message,
        body: response.body.clone(),
    })
}

/// Executes single blocking requests and decodes their JSON bodies.
#[derive(Clone)]
pub struct RequestExecutor {
    agent: ureq::Agent,
    timeout: Duration,
}

impl fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Default for RequestExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl RequestExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: agent_with_timeout(timeout),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` with the configured timeout.
    pub fn execute(&self, url: &str) -> Result<Value, ApiError> {
        self.execute_with(url, HttpMethod::Get, self.timeout)
    }

    /// Send one `method` request to `url`, waiting at most `timeout`.
    pub fn execute_with(
        &self,
        url: &str,
        method: HttpMethod,
        timeout: Duration,
    ) -> Result<Value, ApiError> {
        debug!(method = method.as_str(), %url, "sending request");

        let response = if timeout == self.timeout {
            send(&self.agent, url, method)
        } else {
            send(&agent_with_timeout(timeout), url, method)
        };
        let response = response.map_err(|e| {
            let err = classify(e);
            warn!(method = method.as_str(), %url, error = %err, "request failed");
            err
        })?;

        debug!(status = response.status, %url, "received response");
        parse_response(response)
    }
}

fn agent_with_timeout(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

fn send(agent: &ureq::Agent, url: &str, method: HttpMethod) -> Result<HttpResponse, ureq::Error> {
    let mut response = match method {
        HttpMethod::Get => agent.get(url).call(),
        HttpMethod::Delete => agent.delete(url).call(),
        HttpMethod::Post => agent.post(url).send_empty(),
        HttpMethod::Put => agent.put(url).send_empty(),
    }?;

    let status = response.status();
    let body = response.body_mut().with_config().limit(u64::MAX);
    // An error status must survive an unreadable body.
    let body = if status.as_u16() >= 400 {
        body.read_to_vec()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    } else {
        body.read_to_string()?
    };

    Ok(HttpResponse {
        url: url.to_string(),
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

/// Map a ureq failure onto the client's error kinds.
fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(_) => ApiError::Timeout,
        ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => ApiError::ConnectionFailure,
        ureq::Error::Io(e) => match e.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ApiError::Timeout,
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::AddrNotAvailable => ApiError::ConnectionFailure,
            _ => ApiError::Transport(ureq::Error::Io(e)),
        },
        other => ApiError::Transport(other),
    }
}
