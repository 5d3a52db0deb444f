// HTTP rendering of DashboardError; failure details are logged, never sent
use crate::error::DashboardError;
use crate::presentation::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            DashboardError::AuthFailure => {
                tracing::warn!("rejected login attempt");
                (StatusCode::UNAUTHORIZED, Html(views::login_page(true))).into_response()
            }
            DashboardError::Storage(e) => {
                tracing::error!(error = %e, "metrics store query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::error_page("The metrics store is currently unavailable.")),
                )
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::error_page("Internal server error.")),
                )
                    .into_response()
            }
        }
    }
}
