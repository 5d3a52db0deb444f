// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::credential_checker::CredentialChecker;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::session_store::SessionStore;
use crate::infrastructure::sqlite_repository::SqliteMetricsRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration once; handlers receive it through the state
    let config = load_dashboard_config()
        .inspect_err(|e| tracing::error!(error = %e, "failed to load dashboard config"))?;
    let settings = config.dashboard;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SqliteMetricsRepository::new(settings.database.clone()));

    // Create application state
    let state = Arc::new(AppState {
        credentials: CredentialChecker::new(&settings.user, &settings.pass),
        sessions: SessionStore::generate(),
        dashboard_service: DashboardService::new(repository),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(%addr, database = %settings.database.display(), "starting metrics dashboard");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
