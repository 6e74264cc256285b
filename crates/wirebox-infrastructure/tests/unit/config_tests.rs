//! Configuration loader tests

use std::env;
use std::fs;

use tempfile::TempDir;
use wirebox_domain::{Error, RebindingPolicy};
use wirebox_infrastructure::config::{AppConfig, ConfigLoader};
use wirebox_infrastructure::constants::DEFAULT_LOG_LEVEL;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("wirebox.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.container.rebinding, RebindingPolicy::Reject);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[container]
rebinding = "replace"

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_TOML")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.container.rebinding, RebindingPolicy::Replace);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"warn\"\n");

    let config = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_PARTIAL")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.container.rebinding, RebindingPolicy::Reject);
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_MISSING")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"loud\"\n");

    let error = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_LEVEL")
        .with_config_path(&path)
        .load()
        .unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_unknown_policy_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[container]\nrebinding = \"sometimes\"\n");

    let error = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_POLICY")
        .with_config_path(&path)
        .load()
        .unwrap_err();
    assert!(error.to_string().contains("Failed to extract configuration"));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.container.rebinding = RebindingPolicy::Replace;
    config.logging.level = "trace".to_string();

    let loader = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_SAVE")
        .with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

/// Run with: `cargo test -p wirebox-infrastructure --test unit -- --ignored --test-threads=1`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[container]\nrebinding = \"reject\"\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("WIREBOX_TEST_ENV__CONTAINER__REBINDING", "replace");
    }
    let config = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_ENV")
        .with_config_path(&path)
        .load();
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("WIREBOX_TEST_ENV__CONTAINER__REBINDING");
    }

    assert_eq!(
        config.unwrap().container.rebinding,
        RebindingPolicy::Replace
    );
}
