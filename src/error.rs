// Error taxonomy shared by every layer
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("session encoding error: {0}")]
    Session(#[from] serde_json::Error),

    #[error("invalid credentials")]
    AuthFailure,
}
