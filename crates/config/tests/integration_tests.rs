//! Integration tests for the config crate

use standing_intents_config::{
    validate_config, AppConfig, ConfigError, ConfigLoader, Environment, FillerConfig,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn shipped_config(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../config")
        .join(name)
}

fn temp_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const MINIMAL_TOML: &str = r#"
[network]
environment = "local"

[chain]
chain_id = "localwasm-1"
address_prefix = "wasm"

[factory]
contract_address = "wasm1factory"
intent_code_id = 1
native_denom = "stake"
"#;

#[test]
fn test_load_local_config() {
    let config = ConfigLoader::from_file(&shipped_config("local.toml"))
        .expect("Failed to load local config");

    assert_eq!(config.network.environment, Environment::Local);
    assert_eq!(config.network.log_level, "trace");
    assert_eq!(config.factory.native_denom, "stake");
    validate_config(&config).unwrap();
}

#[test]
fn test_load_testnet_config() {
    let config = ConfigLoader::from_file(&shipped_config("testnet.toml"))
        .expect("Failed to load testnet config");

    assert_eq!(config.network.environment, Environment::Testnet);
    assert!(config.network.json_logs);
    assert_eq!(config.filler.max_batch_size, 8);
    // Unset filler fields fall back to defaults
    assert_eq!(
        config.filler.backoff_max_ms,
        FillerConfig::default().backoff_max_ms
    );
    validate_config(&config).unwrap();
}

#[test]
fn test_yaml_and_toml_agree() {
    let yaml = r#"
network:
  environment: local
chain:
  chain_id: localwasm-1
  address_prefix: wasm
factory:
  contract_address: wasm1factory
  intent_code_id: 1
  native_denom: stake
"#;

    let from_toml = ConfigLoader::from_file(temp_config(".toml", MINIMAL_TOML).path()).unwrap();
    let from_yaml = ConfigLoader::from_file(temp_config(".yaml", yaml).path()).unwrap();
    assert_eq!(from_toml, from_yaml);
}

#[test]
fn test_env_overrides_single_key() {
    let file = temp_config(".toml", MINIMAL_TOML);

    std::env::set_var("SI_ENV_TEST_FILLER__MAX_BATCH_SIZE", "3");
    std::env::set_var("SI_ENV_TEST_NETWORK__LOG_LEVEL", "warn");
    let config = ConfigLoader::from_file_with_env(file.path(), "SI_ENV_TEST").unwrap();
    std::env::remove_var("SI_ENV_TEST_FILLER__MAX_BATCH_SIZE");
    std::env::remove_var("SI_ENV_TEST_NETWORK__LOG_LEVEL");

    assert_eq!(config.filler.max_batch_size, 3);
    assert_eq!(config.network.log_level, "warn");
    // Untouched keys keep the file's values
    assert_eq!(config.chain.chain_id, "localwasm-1");
    assert_eq!(config.factory.intent_code_id, 1);
}

#[test]
fn test_env_override_is_validated() {
    let file = temp_config(".toml", MINIMAL_TOML);

    std::env::set_var("SI_BAD_TEST_FILLER__MAX_BATCH_SIZE", "25");
    let result = ConfigLoader::from_file_with_env(file.path(), "SI_BAD_TEST");
    std::env::remove_var("SI_BAD_TEST_FILLER__MAX_BATCH_SIZE");

    assert!(matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("max_batch_size")));
}

#[test]
fn test_missing_file() {
    let result = ConfigLoader::from_file_with_env(Path::new("/nonexistent/filler.toml"), "X");
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_missing_required_section() {
    let toml = r#"
[network]
environment = "local"
"#;
    assert!(ConfigLoader::from_toml(toml).is_err());
}

#[test]
fn test_roundtrip_through_json() {
    let config = ConfigLoader::from_toml(MINIMAL_TOML).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: AppConfig = ConfigLoader::from_json(&json).unwrap();
    assert_eq!(config, back);
}
