use cosmwasm_std::StdError;
use standing_intents_types::ParamsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid intent parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Intent parameters already bound")]
    AlreadyInitialized {},

    #[error("Invalid funds: expected {expected}, got {got}")]
    InvalidFunds { expected: String, got: String },

    #[error("Sequence mismatch: expected {expected}, got {got}")]
    SequenceMismatch { expected: u64, got: u64 },

    #[error("No outstanding fill for {filler}")]
    NoOutstandingFill { filler: String },

    #[error("Transfer failed during {stage}: {reason}")]
    TransferFailed { stage: String, reason: String },

    #[error("Fill counter overflow")]
    CounterOverflow {},

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
