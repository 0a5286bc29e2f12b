//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_nova_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, nova_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
name = "Vega"
enhance_responses = false

[gemini]
temperature = 0.2
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.name, "Vega");
    assert!(!config.assistant.enhance_responses);
    assert_eq!(config.gemini.temperature, 0.2);
    // Defaults preserved
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.speech.chunk_limit, 4000);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, nova_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[speech]\nvolume = 4.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.speech.volume, 4.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nova").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.name, "Nova");
    assert_eq!(config.assistant.literal_token, "url");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_nova_config() {
    if std::env::var_os(CONFIG_PATH_ENV).is_some() {
        return;
    }
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("nova/config.toml"));
    }
}

#[test]
fn read_error_other_than_missing_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, nova_common::ConfigError::ParseError(_)));
}
