use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use rzd_server::cache::CacheConfig;
use rzd_server::gateway::Gateway;
use rzd_server::rzd::{RzdClient, RzdConfig};
use rzd_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rzd_config = RzdConfig::default();
    if let Ok(base_url) = std::env::var("RZD_BASE_URL") {
        rzd_config = rzd_config.with_base_url(base_url);
    }

    // One shared connection pool for the process lifetime.
    let client = RzdClient::new(rzd_config).expect("Failed to create RZD client");
    let gateway = Gateway::new(client, &CacheConfig::default());
    let state = AppState::new(gateway);

    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "RZD gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
