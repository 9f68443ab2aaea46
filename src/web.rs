use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};
use crate::config::AirInsightConfig;
use crate::fetcher::AirQualityFetcher;

/// Serve the JSON API until Ctrl-C
pub async fn run(config: AirInsightConfig, port: u16) -> Result<()> {
    let fetcher = AirQualityFetcher::from_config(&config)?;
    let state = Arc::new(AppState {
        fetcher,
        dashboard: config.dashboard.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new().nest("/api", api::router(state)).layer(cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Web server failed")
}
