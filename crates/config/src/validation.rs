//! Configuration validation

use crate::{AppConfig, ChainConfig, ConfigError, FillerConfig, Result};
use standing_intents_types::MAX_BATCH_SIZE;

/// Upper bound accepted for `filler.max_sequence_retries`
pub const MAX_SEQUENCE_RETRIES: u32 = 20;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the entire application configuration, reporting every problem at once
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_log_level(&config.network.log_level) {
        errors.push(e);
    }

    if let Err(e) = validate_chain_config(&config.chain) {
        errors.push(ValidationError::new("chain", e));
    }

    // Factory
    if config.factory.contract_address.is_empty() {
        errors.push(ValidationError::new(
            "factory.contract_address",
            "contract address is required",
        ));
    } else if !config.chain.address_prefix.is_empty()
        && !config
            .factory
            .contract_address
            .starts_with(&format!("{}1", config.chain.address_prefix))
    {
        errors.push(ValidationError::new(
            "factory.contract_address",
            format!(
                "address does not use chain prefix '{}'",
                config.chain.address_prefix
            ),
        ));
    }

    if config.factory.intent_code_id == 0 {
        errors.push(ValidationError::new(
            "factory.intent_code_id",
            "must be greater than 0",
        ));
    }

    if config.factory.native_denom.is_empty() {
        errors.push(ValidationError::new(
            "factory.native_denom",
            "native denom is required",
        ));
    }

    errors.extend(validate_filler_config(&config.filler));

    if !errors.is_empty() {
        let error_msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigError::ValidationError(error_msg));
    }

    Ok(())
}

/// Validate a chain configuration
pub fn validate_chain_config(chain: &ChainConfig) -> std::result::Result<(), String> {
    if chain.chain_id.is_empty() {
        return Err("chain_id is required".to_string());
    }

    validate_address_prefix(&chain.address_prefix)
}

fn validate_filler_config(filler: &FillerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if filler.max_batch_size == 0 || filler.max_batch_size > MAX_BATCH_SIZE {
        errors.push(ValidationError::new(
            "filler.max_batch_size",
            format!("must be between 1 and {MAX_BATCH_SIZE}"),
        ));
    }

    if filler.max_sequence_retries > MAX_SEQUENCE_RETRIES {
        errors.push(ValidationError::new(
            "filler.max_sequence_retries",
            format!("must be <= {MAX_SEQUENCE_RETRIES}"),
        ));
    }

    if filler.backoff_base_ms == 0 {
        errors.push(ValidationError::new(
            "filler.backoff_base_ms",
            "must be greater than 0",
        ));
    }

    if filler.backoff_max_ms < filler.backoff_base_ms {
        errors.push(ValidationError::new(
            "filler.backoff_max_ms",
            "must be >= backoff_base_ms",
        ));
    }

    if filler.read_concurrency == 0 {
        errors.push(ValidationError::new(
            "filler.read_concurrency",
            "must be greater than 0",
        ));
    }

    errors
}

/// Bech32 human-readable part: lowercase ASCII letters and digits
pub fn validate_address_prefix(prefix: &str) -> std::result::Result<(), String> {
    if prefix.is_empty() {
        return Err("address_prefix is required".to_string());
    }

    if !prefix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(format!(
            "address_prefix '{prefix}' must be lowercase alphanumeric"
        ));
    }

    Ok(())
}

/// Validate log level
fn validate_log_level(level: &str) -> std::result::Result<(), ValidationError> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new(
            "network.log_level",
            format!(
                "invalid log level '{level}', must be one of: trace, debug, info, warn, error"
            ),
        )),
    }
}
