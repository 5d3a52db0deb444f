// Dashboard service - Use case for building the chart page
use crate::application::metrics_repository::MetricsRepository;
use crate::domain::dashboard::Dashboard;
use crate::error::Result;
use std::sync::Arc;

/// Number of rows shown on the dashboard.
pub const RECENT_ROWS: u32 = 24;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn MetricsRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn MetricsRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> Result<Dashboard> {
        let snapshot = self.repository.fetch_recent(RECENT_ROWS).await?;
        tracing::debug!(rows = snapshot.rows.len(), "loaded recent metrics");

        let title = format!("Latest {} metrics", snapshot.rows.len());
        Ok(Dashboard::new(title, snapshot))
    }
}
