pub mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::{self, HeuristicShield, MemorySessionStore, SessionStore, Shield};
use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<dyn SessionStore>,
    pub shield: Arc<dyn Shield>,
}

impl AppState {
    /// Build state with the built-in session store and shield.
    #[must_use]
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let shield = HeuristicShield::new(config.shield_mode);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            sessions: Arc::new(MemorySessionStore::new()),
            shield: Arc::new(shield),
        }
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn serve(config: Config, catalog: Catalog) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::new(config, catalog);
    let app = create_app(state);

    info!(addr = %addr, "Starting web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    Ok(())
}

/// Assemble the router: routes, static assets, the auth gate, and the
/// outer tracing/compression layers.
pub fn create_app(state: AppState) -> Router {
    routes::router()
        .nest_service("/assets", ServeDir::new(&state.config.assets_dir))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
