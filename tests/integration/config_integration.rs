//! Integration tests for configuration layering

use composer_codegen::config::{ConfigLoader, DEFAULT_OUTPUT, PROJECT_CONFIG_FILE};
use composer_codegen::error::GenerateError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.generator.interface_count, 16);
    assert_eq!(config.generator.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_project_file_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(PROJECT_CONFIG_FILE),
        r#"
[generator]
interface_count = 8
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.generator.interface_count, 8);
    assert_eq!(config.generator.output, PathBuf::from(DEFAULT_OUTPUT));
}

#[test]
fn test_explicit_file_overrides_project_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(PROJECT_CONFIG_FILE),
        r#"
[generator]
interface_count = 8
output = "project/Contexts.kt"
"#,
    )
    .unwrap();

    let explicit = temp_dir.path().join("ci.toml");
    std::fs::write(
        &explicit,
        r#"
[generator]
interface_count = 4
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_with(temp_dir.path(), Some(&explicit)).unwrap();
    assert_eq!(config.generator.interface_count, 4);
    assert_eq!(config.generator.output, PathBuf::from("project/Contexts.kt"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    assert!(matches!(
        ConfigLoader::load_from_file(&missing),
        Err(GenerateError::ConfigError(_))
    ));
}

#[test]
fn test_negative_count_in_file_is_loaded_then_rejected_by_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[generator]\ninterface_count = -1\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.generator.interface_count, -1);
    assert!(matches!(
        config.validate(),
        Err(GenerateError::InvalidInterfaceCount(-1))
    ));
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    std::fs::write(&config_file, "[generator\ninterface_count = ").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_file(&config_file),
        Err(GenerateError::ConfigError(_))
    ));
}
