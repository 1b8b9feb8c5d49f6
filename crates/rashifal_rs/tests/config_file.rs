//! Loading `RashifalConfig` from disk.

use std::io::Write;

use rashifal_rs::{ConfigError, ProviderKind, RashifalConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn full_file_round_trip() {
    let file = write_config(
        r#"
[geo]
endpoint = "http://localhost:8080/{ip}/json/"
timeout_ms = 750
fallback_ip = "1.1.1.1"

[defaults]
city = "Dhaka"
region = "Dhaka Division"
country = "Bangladesh"
lat = 23.8103
lon = 90.4125
timeZone = "Asia/Dhaka"

[ephemeris]
provider = "fixed"
sun = 100.0
moon = 220.0
"#,
    );
    let config = RashifalConfig::from_file(file.path()).unwrap();
    assert_eq!(config.geo.timeout_ms, 750);
    assert_eq!(config.geo.fallback_ip, "1.1.1.1");
    assert_eq!(config.defaults.city, "Dhaka");
    assert_eq!(config.defaults.time_zone, "Asia/Dhaka");
    assert_eq!(config.ephemeris.provider, ProviderKind::Fixed);
    assert_eq!(config.ephemeris.build_provider().unwrap().source(), "fixed");
}

#[test]
fn partial_file_keeps_defaults() {
    let file = write_config("[geo]\ntimeout_ms = 1500\n");
    let config = RashifalConfig::from_file(file.path()).unwrap();
    assert_eq!(config.geo.timeout_ms, 1500);
    assert_eq!(config.geo.endpoint, "https://ipapi.co/{ip}/json/");
    assert_eq!(config.defaults.city, "Kolkata");
    assert_eq!(config.ephemeris.provider, ProviderKind::Analytic);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RashifalConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn syntax_error_is_parse_error() {
    let file = write_config("[geo\ntimeout_ms = ");
    let err = RashifalConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let file = write_config("[defaults]\nlat = 123.0\n");
    let err = RashifalConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
