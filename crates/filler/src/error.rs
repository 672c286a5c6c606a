use standing_intents_config::ConfigError;
use thiserror::Error;

/// Failures reported by the chain when reading or executing an intent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("sequence mismatch: expected {expected}, got {got}")]
    SequenceMismatch { expected: u64, got: u64 },

    #[error("no outstanding fill on {intent}")]
    NoOutstandingFill { intent: String },

    #[error("intent not found: {0}")]
    IntentNotFound(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum FillerError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("gave up on {intent} after {attempts} sequence conflicts")]
    RetriesExhausted { intent: String, attempts: u32 },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("tracing initialization error: {0}")]
    Tracing(String),
}
