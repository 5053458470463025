// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
fn default_uses_thirty_second_timeout() {
    let config = ToolkitConfig::default();
    assert_eq!(config.timeout_ms, 30_000);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.cwd, None);
    assert!(config.env.is_empty());
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(ToolkitConfig::from_toml_str("").unwrap(), ToolkitConfig::default());
}

#[test]
fn parses_every_field() {
    let config = ToolkitConfig::from_toml_str(
        r#"
timeout_ms = 1500
cwd = "/srv/app"

[env]
LC_ALL = "C"
TZ = "UTC"
"#,
    )
    .unwrap();
    assert_eq!(config.timeout(), Duration::from_millis(1500));
    assert_eq!(config.cwd, Some(PathBuf::from("/srv/app")));
    assert_eq!(config.env.get("LC_ALL").map(String::as_str), Some("C"));
    assert_eq!(config.env.len(), 2);
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ToolkitConfig::from_toml_str("timeout_ms = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout), "got: {err:?}");
}

#[test]
fn zero_timeout_falls_back_when_unvalidated() {
    let config = ToolkitConfig { timeout_ms: 0, ..ToolkitConfig::default() };
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ToolkitConfig::from_toml_str("timeout = 5").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got: {err:?}");
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmdkit.toml");
    std::fs::write(&path, "timeout_ms = 250\n").unwrap();
    let config = ToolkitConfig::load(&path).unwrap();
    assert_eq!(config.timeout(), Duration::from_millis(250));
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = ToolkitConfig::load(&path).unwrap_err();
    match &err {
        ConfigError::Read { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Read, got: {other:?}"),
    }
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
#[serial]
fn env_override_replaces_timeout() {
    std::env::set_var(crate::env::TIMEOUT_ENV, "750");
    let config = ToolkitConfig::default().with_env_overrides();
    std::env::remove_var(crate::env::TIMEOUT_ENV);
    assert_eq!(config.timeout(), Duration::from_millis(750));
}

#[test]
#[serial]
fn env_override_ignores_invalid_values() {
    for value in ["0", "soon", "-5", ""] {
        std::env::set_var(crate::env::TIMEOUT_ENV, value);
        let config = ToolkitConfig::default().with_env_overrides();
        std::env::remove_var(crate::env::TIMEOUT_ENV);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT, "value {value:?}");
    }
}
