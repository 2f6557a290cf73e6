//! First-run bootstrap and config loading against a temporary directory.

use autotts::config::{AppConfig, CONFIG_FILE, ENV_API_KEY};
use autotts::Error;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_config_asks_for_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load_with(&dir.path().join(CONFIG_FILE), no_env).unwrap_err();
    assert!(matches!(err, Error::ConfigMissing { .. }), "got {:?}", err);
}

#[test]
fn bootstrap_writes_loadable_starter_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);

    let written = AppConfig::bootstrap(&path, " sk-123 \n").unwrap();
    assert_eq!(written.api_key, "sk-123");

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["api-key"], "sk-123");
    assert_eq!(raw["use-speaker-boost"], true);
    assert_eq!(raw["voices"]["Speaker1"], "ErXwobaYiN019PkySvjV");
    assert_eq!(raw["voices"]["Speaker2"], "VR6AewLTigWG4xSOukaG");

    let loaded = AppConfig::load_with(&path, no_env).unwrap();
    assert_eq!(loaded, written);
    assert_eq!(loaded.voice_settings().stability, 0.5);
}

#[test]
fn bootstrap_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, "{}").unwrap();
    let err = AppConfig::bootstrap(&path, "sk").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn malformed_config_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, r#"{"api-key": "k", "stability": "high"}"#).unwrap();
    let err = AppConfig::load_with(&path, no_env).unwrap_err();
    assert_eq!(err.context().and_then(|c| c.source.as_deref()), Some("config"));
}

#[test]
fn env_key_fills_an_empty_file_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    let mut config = AppConfig::starter("");
    config.voices.clear();
    config.save(&path).unwrap();

    assert!(AppConfig::load_with(&path, no_env).is_err());
    let loaded = AppConfig::load_with(&path, |name| {
        (name == ENV_API_KEY).then(|| "sk-env".to_string())
    })
    .unwrap();
    assert_eq!(loaded.api_key, "sk-env");
    assert!(loaded.voices.is_empty());
}
