//! 配置与日志配置测试

use std::time::Duration;
use t_translate::infrastructure::config::{load_config_from, write_config_sample, Config};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert!(config.logging.enable);
    assert!(config.logging.path.is_none());
    assert_eq!(config.logging.level, "WARN");
}

#[test]
fn test_zero_timeout_falls_back_to_default() {
    let config = Config {
        timeout_secs: 0,
        ..Config::default()
    };
    assert_eq!(config.timeout(), Duration::from_secs(5));
}

#[test]
fn test_log_level_parsing() {
    let mut logging = Config::default().logging;

    for (level, expected) in [
        ("DEBUG", "debug"),
        ("INFO", "info"),
        ("WARN", "warn"),
        ("ERROR", "error"),
        ("debug", "debug"),
        ("verbose", "warn"),
    ] {
        logging.level = level.to_string();
        assert_eq!(logging.filter_directive(), expected);
    }
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_toml_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
timeout_secs = 10

[logging]
enable = false
path = "/tmp/t.log"
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert!(!config.logging.enable);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/t.log"));
    assert_eq!(config.logging.filter_directive(), "debug");
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"INFO\"\n").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.timeout_secs, 5);
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "INFO");
}

#[test]
fn test_invalid_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_generate_config_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t").join("config.toml");

    assert!(write_config_sample(&path).unwrap());
    assert_eq!(load_config_from(&path).unwrap(), Config::default());

    // Existing files are left alone
    std::fs::write(&path, "timeout_secs = 9\n").unwrap();
    assert!(!write_config_sample(&path).unwrap());
    assert_eq!(load_config_from(&path).unwrap().timeout_secs, 9);
}
