use std::fs;
use std::path::PathBuf;

use marquee_config::{
    ConfigLoadError, ConfigLoader, EnvConfig, StorageBackend,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("marquee.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_values_are_loaded_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let media_root = dir.path().join("media");
    let path = write_config(
        &dir,
        &format!(
            r#"
            [storage]
            backend = "local"
            root = "{}"

            [events]
            channel_capacity = 32

            [logging]
            filter = "debug"
            "#,
            media_root.display()
        ),
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap();

    assert_eq!(load.config.storage.backend, StorageBackend::Local);
    assert_eq!(load.config.storage.root, Some(media_root));
    assert_eq!(load.config.events.channel_capacity, 32);
    assert_eq!(load.config.logging.filter, "debug");
    assert_eq!(load.config.metadata.config_path, Some(path));
    assert!(!load.config.metadata.env_file_loaded);
    assert!(load.warnings.is_empty());
}

#[test]
fn config_path_from_environment_is_honoured() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[events]\nchannel_capacity = 7\n");

    let load = ConfigLoader::new()
        .load_with_env(EnvConfig {
            config_path: Some(path.clone()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(load.config.events.channel_capacity, 7);
    assert_eq!(load.config.metadata.config_path, Some(path));
}

#[test]
fn missing_explicit_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(
        matches!(err, ConfigLoadError::MissingConfig { path: ref missing } if *missing == path)
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[events\nchannel_capacity = ");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}
