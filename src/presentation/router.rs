// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard, health_check, login, login_form};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(login_form).post(login))
        .route("/dashboard", get(dashboard))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
