mod config;
mod errors;
mod matching;
mod models;
mod pages;
mod report;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::MatchClient;
use crate::pages::branding::Branding;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobFit v{}", env!("CARGO_PKG_VERSION"));

    let matcher = MatchClient::new(
        config.match_service_url.clone(),
        config.match_timeout,
        config.match_connect_timeout,
    )
    .context("Failed to build HTTP client for the match service")?;
    info!(
        "Match client initialized (endpoint: {}, timeout: {:?})",
        matcher.endpoint(),
        config.match_timeout
    );

    let branding = Branding::load(&config.logo_path);

    let state = AppState {
        config: config.clone(),
        matcher: Arc::new(matcher),
        branding: Arc::new(branding),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
