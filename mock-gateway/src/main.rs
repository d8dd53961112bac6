use anyhow::Context;
use mock_gateway::{app, AppState, MockConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MockConfig::from_env()?;
    let addr = config.socket_addr();
    info!(
        %addr,
        public_base_url = %config.public_base_url,
        timeout_delay_secs = config.timeout_delay.as_secs(),
        "starting mock-gateway"
    );

    let state = AppState::new(config)?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
