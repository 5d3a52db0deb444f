// Metrics domain models - rows read back from the metrics table

/// Column holding the ordering key of every metric row.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// A single cell, typed by SQLite storage class.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl MetricValue {
    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Integer(v) => Some(*v as f64),
            MetricValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Human readable rendering used in tables.
    pub fn display(&self) -> String {
        match self {
            MetricValue::Null => String::new(),
            MetricValue::Integer(v) => v.to_string(),
            MetricValue::Real(v) => format!("{:.2}", v),
            MetricValue::Text(v) => v.clone(),
            MetricValue::Blob(v) => format!("<{} bytes>", v.len()),
        }
    }

    /// Chart label for a timestamp cell. Numbers are unix seconds (UTC).
    pub fn timestamp_label(&self) -> String {
        let secs = match self {
            MetricValue::Integer(v) => *v,
            MetricValue::Real(v) => *v as i64,
            MetricValue::Text(v) => return v.clone(),
            MetricValue::Null | MetricValue::Blob(_) => return String::new(),
        };
        chrono::DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| secs.to_string())
    }
}

/// One row of the metrics table; values line up with the snapshot's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub values: Vec<MetricValue>,
}

impl MetricRow {
    pub fn new(values: Vec<MetricValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&MetricValue> {
        self.values.get(index)
    }
}

/// The most recent rows of the metrics table, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub columns: Vec<String>,
    pub rows: Vec<MetricRow>,
}

impl MetricsSnapshot {
    pub fn new(columns: Vec<String>, rows: Vec<MetricRow>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
