// HTTP request handlers
use crate::domain::session::Session;
use crate::error::{DashboardError, Result};
use crate::presentation::app_state::AppState;
use crate::presentation::views;
use axum::{
    extract::{Form, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LoginForm {
    pub user: String,
    pub pass: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Login form
pub async fn login_form() -> Html<String> {
    Html(views::login_page(false))
}

/// Verify the submitted credentials and start a session
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if !state.credentials.check(&form.user, &form.pass) {
        return Err(DashboardError::AuthFailure);
    }

    let cookie = state.sessions.issue(&Session::authenticated())?;
    tracing::info!("operator logged in");

    Ok(([(header::SET_COOKIE, cookie)], Html(views::landing_page())).into_response())
}

/// Chart page for the most recent metrics; requires a session
pub async fn dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response> {
    if !state.sessions.is_authenticated(&headers) {
        return Ok(Redirect::to("/").into_response());
    }

    let dashboard = state.dashboard_service.load().await?;
    Ok(Html(views::charts_page(&dashboard)).into_response())
}
