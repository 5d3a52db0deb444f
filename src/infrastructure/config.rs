use config::{Map, Value, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Location of the operator's config file.
pub const CONFIG_PATH: &str = "/opt/VPSIk-Alert/config/config.json";

/// Default location of the metrics database written by the collector.
pub const DEFAULT_DATABASE_PATH: &str = "/opt/VPSIk-Alert/database/metrics.db";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub user: String,
    pub pass: String,
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database: PathBuf,
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

pub fn load_dashboard_config() -> Result<AppConfig> {
    load_config_from_path(CONFIG_PATH)
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Json))
        .build()?;

    check_field_types(&settings.get_table("dashboard")?)?;
    Ok(settings.try_deserialize()?)
}

/// `config` coerces scalars while deserializing ("port": "5000" would load),
/// so the raw kinds are checked first. Values are never echoed: `pass` is one.
fn check_field_types(dashboard: &Map<String, Value>) -> Result<()> {
    let is_string = |kind: &ValueKind| matches!(kind, ValueKind::String(_));
    let is_integer = |kind: &ValueKind| {
        matches!(
            kind,
            ValueKind::I64(_) | ValueKind::I128(_) | ValueKind::U64(_) | ValueKind::U128(_)
        )
    };

    expect_kind(dashboard, "user", "a string", is_string)?;
    expect_kind(dashboard, "pass", "a string", is_string)?;
    expect_kind(dashboard, "port", "an integer", is_integer)?;
    expect_kind(dashboard, "database", "a string", is_string)?;
    Ok(())
}

/// Absent keys pass here; required ones are reported by deserialization.
fn expect_kind(
    dashboard: &Map<String, Value>,
    key: &str,
    expected: &str,
    matches_kind: impl Fn(&ValueKind) -> bool,
) -> Result<()> {
    match dashboard.get(key) {
        Some(value) if !matches_kind(&value.kind) => Err(config::ConfigError::Message(format!(
            "dashboard.{} must be {}",
            key, expected
        ))
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = write_config(r#"{"dashboard":{"user":"admin","pass":"secret","port":5000}}"#);

        let config = load_config_from_path(file.path()).unwrap();

        assert_eq!(config.dashboard.user, "admin");
        assert_eq!(config.dashboard.pass, "secret");
        assert_eq!(config.dashboard.port, 5000);
        assert_eq!(config.dashboard.database, PathBuf::from(DEFAULT_DATABASE_PATH));
    }

    #[test]
    fn test_database_override() {
        let file = write_config(
            r#"{"dashboard":{"user":"a","pass":"b","port":8080,"database":"/tmp/m.db"}}"#,
        );

        let config = load_config_from_path(file.path()).unwrap();

        assert_eq!(config.dashboard.database, PathBuf::from("/tmp/m.db"));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let file = write_config(r#"{"dashboard":{"user":"admin","port":5000}}"#);
        let err = load_config_from_path(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = write_config("{ not json");
        let err = load_config_from_path(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_port_out_of_range_is_config_error() {
        let file = write_config(r#"{"dashboard":{"user":"a","pass":"b","port":70000}}"#);
        let err = load_config_from_path(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_wrongly_typed_fields_are_config_errors() {
        let cases = [
            r#"{"dashboard":{"user":123,"pass":"secret","port":5000}}"#,
            r#"{"dashboard":{"user":"admin","pass":true,"port":5000}}"#,
            r#"{"dashboard":{"user":"admin","pass":"secret","port":"5000"}}"#,
            r#"{"dashboard":{"user":"admin","pass":"secret","port":5000.5}}"#,
            r#"{"dashboard":{"user":"admin","pass":"secret","port":5000,"database":7}}"#,
            r#"{"dashboard":"admin"}"#,
        ];

        for contents in cases {
            let file = write_config(contents);
            let err = load_config_from_path(file.path()).unwrap_err();
            assert!(matches!(err, DashboardError::Config(_)), "accepted {}", contents);
        }
    }

    #[test]
    fn test_type_error_does_not_echo_password() {
        let file = write_config(r#"{"dashboard":{"user":"admin","pass":31337,"port":5000}}"#);
        let err = load_config_from_path(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("dashboard.pass"));
        assert!(!message.contains("31337"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
