//! fleetline exporter binary.
//!
//! - TSDB ingest: TCP listener, one task per connection
//! - Metrics endpoint: GET scrapes the registry and resets per-label gauges

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use fleetline_exporter::{app_state, config, ingest, web};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fleetline.yaml".to_string());
    let cfg = config::load_from_file(&config_path).expect("config load failed");

    let ingest_addr: SocketAddr = cfg
        .ingest
        .listen
        .parse()
        .expect("ingest.listen must be a valid SocketAddr");
    let web_addr: SocketAddr = cfg
        .web
        .listen
        .parse()
        .expect("web.listen must be a valid SocketAddr");
    let retry = cfg.ingest.retry();

    let state = app_state::AppState::new(cfg);

    tracing::info!(%ingest_addr, "tsdb ingest listening");
    let tsdb_listener = tokio::net::TcpListener::bind(ingest_addr)
        .await
        .expect("failed to bind tsdb listener");
    let registry = state.registry();
    tokio::spawn(async move {
        if let Err(err) = ingest::run(tsdb_listener, registry, retry).await {
            tracing::error!(error = %err, "tsdb ingest terminated");
        }
    });

    let app = web::build_router(state);

    tracing::info!(%web_addr, "metrics endpoint listening");
    let listener = tokio::net::TcpListener::bind(web_addr)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
