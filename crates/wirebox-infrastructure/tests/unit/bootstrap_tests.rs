//! Bootstrap tests

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use wirebox_domain::{ComponentKey, RebindingPolicy};
use wirebox_infrastructure::bootstrap::{context_config, load_context_config};
use wirebox_infrastructure::config::{AppConfig, ConfigLoader};

#[test]
fn test_registry_follows_configured_policy() {
    let mut config = AppConfig::default();
    assert_eq!(context_config(&config).policy(), RebindingPolicy::Reject);

    config.container.rebinding = RebindingPolicy::Replace;
    let mut registry = context_config(&config);
    registry
        .bind_value(ComponentKey::new("greeting"), Arc::new("hello"))
        .unwrap()
        .bind_value(ComponentKey::new("greeting"), Arc::new("bonjour"))
        .unwrap();

    let greeting = registry
        .build()
        .unwrap()
        .get_as::<&str>(&ComponentKey::new("greeting"))
        .unwrap()
        .unwrap();
    assert_eq!(*greeting, "bonjour");
}

#[test]
fn test_load_registry_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wirebox.toml");
    fs::write(&path, "[container]\nrebinding = \"replace\"\n").unwrap();

    let loader = ConfigLoader::new()
        .with_env_prefix("WIREBOX_TEST_BOOTSTRAP")
        .with_config_path(&path);
    let registry = load_context_config(&loader).unwrap();
    assert_eq!(registry.policy(), RebindingPolicy::Replace);
    assert!(registry.is_empty());
}
