use cosmwasm_std::StdError;
use standing_intents_types::ParamsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid intent parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("Native denom must not be empty")]
    InvalidNativeDenom {},

    #[error("Invalid funds: expected {expected}, got {got}")]
    InvalidFunds { expected: String, got: String },

    #[error("Intent already exists at {address}")]
    IntentExists { address: String },

    #[error("Batch too large: {size} entries (max {max})")]
    BatchTooLarge { size: usize, max: usize },

    #[error("Batch length mismatch: {intents} intents, {sequences} sequences")]
    BatchLengthMismatch { intents: usize, sequences: usize },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
