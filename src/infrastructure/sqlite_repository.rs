// SQLite repository implementation
use crate::application::metrics_repository::MetricsRepository;
use crate::domain::metrics::{MetricRow, MetricValue, MetricsSnapshot};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column, Connection, Row, TypeInfo, ValueRef};
use std::path::PathBuf;

const RECENT_METRICS_QUERY: &str = "SELECT * FROM metrics ORDER BY timestamp DESC LIMIT ?";

/// Reads the metrics table with a fresh connection per call; nothing is pooled.
#[derive(Debug, Clone)]
pub struct SqliteMetricsRepository {
    path: PathBuf,
}

impl SqliteMetricsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn connect(&self) -> Result<SqliteConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true)
            .create_if_missing(false);

        Ok(SqliteConnection::connect_with(&options).await?)
    }
}

#[async_trait]
impl MetricsRepository for SqliteMetricsRepository {
    async fn fetch_recent(&self, limit: u32) -> Result<MetricsSnapshot> {
        let mut conn = self.connect().await?;

        let fetched = sqlx::query(RECENT_METRICS_QUERY)
            .bind(limit)
            .fetch_all(&mut conn)
            .await;

        // Closed unconditionally, before the query result is inspected
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close metrics connection");
        }

        let rows = fetched?;
        let columns = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let rows = rows
            .iter()
            .map(decode_row)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

        Ok(MetricsSnapshot::new(columns, rows))
    }
}

/// Decode every column by the storage class of its value, since the table's
/// schema is owned by the collector.
fn decode_row(row: &SqliteRow) -> std::result::Result<MetricRow, sqlx::Error> {
    let mut values = Vec::with_capacity(row.len());

    for index in 0..row.len() {
        let storage_class = {
            let raw = row.try_get_raw(index)?;
            if raw.is_null() {
                values.push(MetricValue::Null);
                continue;
            }
            raw.type_info().name().to_string()
        };

        let value = match storage_class.as_str() {
            "INTEGER" | "BOOLEAN" => MetricValue::Integer(row.try_get_unchecked(index)?),
            "REAL" | "NUMERIC" => MetricValue::Real(row.try_get_unchecked(index)?),
            "TEXT" | "DATE" | "DATETIME" | "TIME" => {
                MetricValue::Text(row.try_get_unchecked(index)?)
            }
            _ => MetricValue::Blob(row.try_get_unchecked(index)?),
        };
        values.push(value);
    }

    Ok(MetricRow::new(values))
}
