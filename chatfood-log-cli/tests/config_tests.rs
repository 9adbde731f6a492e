//! Integration tests for chatfood-log configuration loading.
//!
//! Tests TOML file loading and environment variable precedence.

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use chatfood_log_cli::config::AppConfig;

#[tokio::test]
async fn test_config_load_valid_toml() {
    // Given: A valid config file
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("chatfood-log.toml");

    let valid_config = r#"
[general]
log_level = "info"
log_format = "json"

[analyzer]
slow_threshold_ms = 750
top_error_patterns = 3
hourly_bar_unit = 5
bar_char = "*"
"#;

    fs::write(&config_path, valid_config).expect("should write config");

    // When: Loading the config
    let config = AppConfig::from_file(&config_path)
        .await
        .expect("valid config should load successfully");

    // Then: Values come from the file
    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.general.log_format, "json");
    assert_eq!(config.analyzer.slow_threshold_ms, 750);
    assert_eq!(config.analyzer.top_error_patterns, 3);
    assert_eq!(config.analyzer.hourly_bar_unit, 5);
    assert_eq!(config.analyzer.bar_char, '*');
}

#[tokio::test]
async fn test_config_load_malformed_toml() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("bad.toml");

    fs::write(&config_path, "[general\nlog_level = \"info\"\n").expect("should write bad config");

    let result = AppConfig::from_file(&config_path).await;
    let err = result.expect_err("malformed TOML should fail to load");
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_config_explicit_missing_file_is_error() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let missing = temp_dir.path().join("missing.toml");

    let err = AppConfig::load(Some(&missing))
        .await
        .expect_err("explicit missing config should fail");
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("missing.toml"));
}

#[tokio::test]
async fn test_config_invalid_values_rejected_on_load() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("chatfood-log.toml");
    fs::write(&config_path, "[analyzer]\nhourly_bar_unit = 0\n").expect("should write config");

    let err = AppConfig::load(Some(&config_path))
        .await
        .expect_err("zero bar unit should be rejected");
    assert!(err.to_string().contains("hourly_bar_unit"));
}

#[tokio::test]
#[serial]
async fn test_env_overrides_file_values() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("chatfood-log.toml");
    fs::write(
        &config_path,
        "[general]\nlog_level = \"info\"\n\n[analyzer]\nslow_threshold_ms = 750\n",
    )
    .expect("should write config");

    // SAFETY: serial 테스트로 환경변수 동시 접근을 막는다
    unsafe {
        std::env::set_var("CHATFOOD_GENERAL_LOG_LEVEL", "debug");
        std::env::set_var("CHATFOOD_ANALYZER_SLOW_THRESHOLD_MS", "2000");
        std::env::set_var("CHATFOOD_ANALYZER_TOP_ERROR_PATTERNS", "10");
    }

    let result = AppConfig::load(Some(&config_path)).await;

    unsafe {
        std::env::remove_var("CHATFOOD_GENERAL_LOG_LEVEL");
        std::env::remove_var("CHATFOOD_ANALYZER_SLOW_THRESHOLD_MS");
        std::env::remove_var("CHATFOOD_ANALYZER_TOP_ERROR_PATTERNS");
    }

    let config = result.expect("config should load");
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.analyzer.slow_threshold_ms, 2000);
    assert_eq!(config.analyzer.top_error_patterns, 10);
}

#[tokio::test]
#[serial]
async fn test_unparsable_env_value_is_ignored() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("chatfood-log.toml");
    fs::write(&config_path, "[analyzer]\nhourly_bar_unit = 20\n").expect("should write config");

    unsafe {
        std::env::set_var("CHATFOOD_ANALYZER_HOURLY_BAR_UNIT", "lots");
    }

    let result = AppConfig::load(Some(&config_path)).await;

    unsafe {
        std::env::remove_var("CHATFOOD_ANALYZER_HOURLY_BAR_UNIT");
    }

    let config = result.expect("config should load");
    assert_eq!(config.analyzer.hourly_bar_unit, 20);
}
