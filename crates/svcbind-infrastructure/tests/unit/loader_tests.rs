//! Tests for the configuration loader

use tempfile::TempDir;

use svcbind_infrastructure::config::{AppConfig, ConfigLoader};

#[test]
fn defaults_apply_without_any_source() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/svcbind.toml")
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.source.env_var, "SVCBIND_SERVICES");
    assert_eq!(config.catalog.malformed_policy, "abort");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn toml_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("svcbind.toml");
    std::fs::write(
        &config_path,
        r#"
[catalog]
malformed_policy = "skip"

[logging]
level = "debug"
json_format = true
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.catalog.malformed_policy, "skip");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    // Untouched sections keep their defaults
    assert_eq!(config.source.env_var, "SVCBIND_SERVICES");
}

#[test]
fn env_vars_override_the_file() {
    // Dedicated prefix so parallel tests cannot see this variable
    std::env::set_var("SVCBIND_LOADERTEST_LOGGING__LEVEL", "warn");

    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/svcbind.toml")
        .with_env_prefix("SVCBIND_LOADERTEST")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "warn");

    std::env::remove_var("SVCBIND_LOADERTEST_LOGGING__LEVEL");
}

#[test]
fn invalid_policy_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("svcbind.toml");
    std::fs::write(&config_path, "[catalog]\nmalformed_policy = \"ignore\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    assert!(result.is_err());
}

#[test]
fn invalid_log_level_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("svcbind.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    assert!(result.is_err());
}

#[test]
fn config_save_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.catalog.malformed_policy = "skip".to_string();
    original.source.env_var = "MY_SERVICES".to_string();

    let loader = ConfigLoader::new();
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(loaded, original);
}
