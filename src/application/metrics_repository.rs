// Repository trait for metrics data access
use crate::domain::metrics::MetricsSnapshot;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Fetch up to `limit` rows of the metrics table, most recent timestamp first
    async fn fetch_recent(&self, limit: u32) -> Result<MetricsSnapshot>;
}
