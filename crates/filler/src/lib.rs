//! Off-chain filler for Standing Intents
//!
//! Reads each intent's sequence, submits fills and reclaims through the factory's batch
//! entry points, and retries fills that lost a sequence race.

pub mod backoff;
pub mod error;
pub mod ledger;
pub mod planner;
pub mod service;
pub mod telemetry;

pub use backoff::ExponentialBackoff;
pub use error::{FillerError, LedgerError};
pub use ledger::{BatchReport, FailedEntry, FillEntry, FillReceipt, IntentLedger};
pub use planner::plan_batches;
pub use service::{BatchOutcome, FailureStage, FillerService, IntentFailure};
pub use telemetry::init_tracing;
