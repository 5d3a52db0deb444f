// Dashboard domain model - charts derived from a metrics snapshot
use super::metrics::{MetricsSnapshot, TIMESTAMP_COLUMN};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub y_min: f64,
    pub y_max: f64,
    /// Oldest first, so charts read left to right.
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    pub snapshot: MetricsSnapshot,
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn new(title: String, snapshot: MetricsSnapshot) -> Self {
        let charts = build_charts(&snapshot);
        Self {
            title,
            snapshot,
            charts,
        }
    }
}

/// One chart per column (other than the timestamp) holding any numeric value.
fn build_charts(snapshot: &MetricsSnapshot) -> Vec<ChartData> {
    let timestamp_index = snapshot.column_index(TIMESTAMP_COLUMN);

    snapshot
        .columns
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != timestamp_index)
        .filter_map(|(index, column)| {
            let points: Vec<ChartPoint> = snapshot
                .rows
                .iter()
                .rev()
                .filter_map(|row| {
                    let value = row.get(index)?.as_f64()?;
                    let label = timestamp_index
                        .and_then(|ts| row.get(ts))
                        .map(|ts| ts.timestamp_label())
                        .unwrap_or_default();
                    Some(ChartPoint::new(label, value))
                })
                .collect();

            if points.is_empty() {
                return None;
            }

            let y_min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
            let y_max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);

            Some(ChartData {
                title: column.clone(),
                y_min,
                y_max,
                points,
            })
        })
        .collect()
}
