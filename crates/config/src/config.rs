//! Configuration structures for the Standing Intents filler

use serde::{Deserialize, Serialize};
use standing_intents_types::MAX_BATCH_SIZE;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Network configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// Chain the factory is deployed on
    pub chain: ChainConfig,

    /// Factory deployment
    pub factory: FactoryConfig,

    /// Filler behaviour
    #[serde(default)]
    pub filler: FillerConfig,
}

/// Network environment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Environment type (mainnet, testnet, local)
    pub environment: Environment,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Mainnet,
    Testnet,
    Local,
}

/// Chain hosting the factory; ledger implementations sign for `chain_id` and
/// address intents with `address_prefix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChainConfig {
    /// Chain identifier
    pub chain_id: String,

    /// Bech32 address prefix (e.g., "cosmos")
    pub address_prefix: String,
}

/// Factory deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Factory contract address
    pub contract_address: String,

    /// Code id of the intent template
    pub intent_code_id: u64,

    /// Denom moved by intents without an asset
    #[serde(default = "default_native_denom")]
    pub native_denom: String,
}

/// Filler behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerConfig {
    /// Entries per `MultiFill`/`MultiReclaim`, at most 10
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Retries after a sequence mismatch before giving up on an intent
    #[serde(default = "default_max_sequence_retries")]
    pub max_sequence_retries: u32,

    /// Initial retry delay in milliseconds
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Retry delay ceiling in milliseconds
    #[serde(default = "default_backoff_max_ms")]
    pub backoff_max_ms: u64,

    /// Retry failed batch entries individually
    #[serde(default = "default_true")]
    pub retry_failed_entries: bool,

    /// Concurrent sequence reads
    #[serde(default = "default_read_concurrency")]
    pub read_concurrency: usize,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_native_denom() -> String {
    "uatom".to_string()
}

fn default_max_batch_size() -> usize {
    MAX_BATCH_SIZE
}

fn default_max_sequence_retries() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    100
}

fn default_backoff_max_ms() -> u64 {
    30000
}

fn default_read_concurrency() -> usize {
    4
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            intent_code_id: 0,
            native_denom: default_native_denom(),
        }
    }
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            max_sequence_retries: default_max_sequence_retries(),
            backoff_base_ms: default_backoff_base_ms(),
            backoff_max_ms: default_backoff_max_ms(),
            retry_failed_entries: default_true(),
            read_concurrency: default_read_concurrency(),
        }
    }
}
