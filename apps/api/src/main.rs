mod catalog;
mod config;
mod errors;
mod extract;
mod outreach;
mod prospects;
mod random;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::IndustryCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast on malformed env values
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prospector API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    info!(
        "Industry catalog loaded: {} industries, {} first names, {} last names",
        catalog.industries.len(),
        catalog.first_names.len(),
        catalog.last_names.len()
    );
    info!(
        "Company pool size {}, focus splice probability {}",
        config.company_pool_size, config.focus_splice_probability
    );

    let state = AppState::new(&config, catalog);
    spawn_session_sweeper(state.sessions.clone());

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in tables unless `CATALOG_PATH` points at a JSON catalog.
fn load_catalog(config: &Config) -> Result<IndustryCatalog> {
    match &config.catalog_path {
        Some(path) => {
            info!("Loading industry catalog from {}", path.display());
            IndustryCatalog::from_file(path)
                .with_context(|| format!("Invalid catalog at {}", path.display()))
        }
        None => Ok(IndustryCatalog::builtin()),
    }
}

/// Periodically drops sessions idle past their TTL.
fn spawn_session_sweeper(sessions: SessionStore) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            sessions.purge_expired().await;
        }
    });
}
