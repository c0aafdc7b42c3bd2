//! Roster API Server
//!
//! Keeps an ordered, in-memory roster of submitted names and serves the
//! browser page that drives it.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryNameRepository;
use app::NameService;
use config::Config;
use error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub name_service: Arc<NameService<InMemoryNameRepository>>,
}

impl AppState {
    /// Fresh state with an empty roster
    pub fn new() -> Self {
        let name_repo = Arc::new(InMemoryNameRepository::new());
        Self {
            name_service: Arc::new(NameService::new(name_repo)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
    names: usize,
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        names: state.name_service.count().await?,
    }))
}

/// Build the router: JSON API under `/api`, static page for everything else
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Name roster
        .route(
            "/api/names",
            get(handlers::list_names).post(handlers::add_name),
        )
        // Page markup, stylesheet and controller script
        .fallback_service(ServeDir::new(static_dir))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster API...");

    // Load configuration
    let config = Config::from_env();
    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; only the API will be served",
            config.static_dir.display()
        );
    }

    let app = build_router(AppState::new(), &config.static_dir);

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
