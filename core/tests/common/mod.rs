//! Shared harness: run `mock_server` on a random port in a background
//! thread and point a client at it.

#![allow(dead_code)]

use mock_server::{Fixture, MockState};

pub struct TestServer {
    pub base_url: String,
    pub state: MockState,
}

impl TestServer {
    /// Request targets (`path?query`) the server has seen so far.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.blocking_read().clone()
    }
}

pub fn start(fixtures: Vec<(&str, Fixture)>) -> TestServer {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let state = MockState::new(
        fixtures
            .into_iter()
            .map(|(route, fixture)| (route.to_string(), fixture))
            .collect(),
    );
    let server_state = state.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, server_state).await
        })
        .unwrap();
    });

    TestServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// An address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
