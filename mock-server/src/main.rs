use std::collections::HashMap;

use mock_server::{default_fixtures, Fixture, MockState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let fixtures = match std::env::var("FIXTURES") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let fixtures: HashMap<String, Fixture> = serde_json::from_str(&raw)?;
            info!(%path, count = fixtures.len(), "loaded fixtures");
            fixtures
        }
        Err(_) => default_fixtures(),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    mock_server::run(listener, MockState::new(fixtures)).await?;
    Ok(())
}
