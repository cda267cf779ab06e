use marquee::config::{Config, ConfigError, ListLayout};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.api.image_base_url, "https://image.tmdb.org/t/p/w500");
    assert!(config.api.api_key.is_none());
    assert_eq!(config.api.api_key_env, "TMDB_API_KEY");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.max_attempts, 1);
    assert_eq!(config.ui.layout, ListLayout::Grid);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("marquee/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://localhost:9000/3"
max_attempts = 3

[ui]
layout = "column"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9000/3");
    assert_eq!(config.api.max_attempts, 3);
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.layout, ListLayout::Column);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_unknown_layout_is_parse_error() {
    let (_dir, path) = write_config("[ui]\nlayout = \"carousel\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_validation_rejects_bad_numbers() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.api.max_attempts = 0;
    assert!(config.validate().is_err());
    config.api.max_attempts = 6;
    assert!(config.validate().is_err());
    config.api.max_attempts = 5;
    assert!(config.validate().is_ok());

    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_api_key_prefers_explicit_then_env_then_file() {
    let mut config = Config::default();
    config.api.api_key_env = "MARQUEE_TEST_KEY_ORDER".to_string();
    config.api.api_key = Some("from-file".to_string());

    std::env::remove_var("MARQUEE_TEST_KEY_ORDER");
    assert_eq!(config.resolve_api_key(None).unwrap(), "from-file");

    std::env::set_var("MARQUEE_TEST_KEY_ORDER", "from-env");
    assert_eq!(config.resolve_api_key(None).unwrap(), "from-env");
    assert_eq!(config.resolve_api_key(Some("from-cli")).unwrap(), "from-cli");

    std::env::remove_var("MARQUEE_TEST_KEY_ORDER");
}

#[test]
fn test_blank_api_keys_are_skipped() {
    let mut config = Config::default();
    config.api.api_key_env = "MARQUEE_TEST_KEY_BLANK".to_string();
    config.api.api_key = Some("file-key".to_string());
    std::env::set_var("MARQUEE_TEST_KEY_BLANK", "   ");

    assert_eq!(config.resolve_api_key(Some("")).unwrap(), "file-key");

    std::env::remove_var("MARQUEE_TEST_KEY_BLANK");
}

#[test]
fn test_missing_api_key_names_the_variable() {
    let mut config = Config::default();
    config.api.api_key_env = "MARQUEE_TEST_KEY_MISSING".to_string();
    std::env::remove_var("MARQUEE_TEST_KEY_MISSING");

    let err = config.resolve_api_key(None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    assert!(err.to_string().contains("MARQUEE_TEST_KEY_MISSING"));
}
