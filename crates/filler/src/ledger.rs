use async_trait::async_trait;
use cosmwasm_std::Event;
use serde::{Deserialize, Serialize};
use standing_intents_types::BATCH_ENTRY_FAILED_EVENT;

use crate::error::LedgerError;

/// One `MultiFill` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillEntry {
    pub intent: String,
    pub expected_sequence: u64,
}

/// Result of a single accepted fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReceipt {
    pub intent: String,
    pub sequence: u64,
    pub tx_hash: String,
}

/// A batch entry the factory reported as failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedEntry {
    pub index: u32,
    pub intent: String,
    pub error: String,
}

/// Outcome of one `MultiFill` or `MultiReclaim` transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub tx_hash: String,
    pub failed: Vec<FailedEntry>,
}

impl BatchReport {
    /// Collect failed entries from the factory's `batch_entry_failed` events.
    ///
    /// Matches both the raw event type and the `wasm-` prefixed form emitted on chain.
    pub fn from_events(tx_hash: impl Into<String>, events: &[Event]) -> Self {
        let prefixed = format!("wasm-{BATCH_ENTRY_FAILED_EVENT}");
        let failed = events
            .iter()
            .filter(|e| e.ty == BATCH_ENTRY_FAILED_EVENT || e.ty == prefixed)
            .filter_map(|e| {
                let attr = |key: &str| {
                    e.attributes
                        .iter()
                        .find(|a| a.key == key)
                        .map(|a| a.value.clone())
                };
                Some(FailedEntry {
                    index: attr("index")?.parse().ok()?,
                    intent: attr("intent")?,
                    error: attr("error").unwrap_or_default(),
                })
            })
            .collect();

        Self {
            tx_hash: tx_hash.into(),
            failed,
        }
    }

    pub fn is_failed(&self, index: usize) -> bool {
        self.failed.iter().any(|f| f.index as usize == index)
    }
}

/// Chain access needed by the filler.
///
/// Implementations sign and broadcast as the filler's account; every call is one query or
/// one transaction.
#[async_trait]
pub trait IntentLedger: Send + Sync {
    /// Current `outstanding_fills`, which is the sequence the next fill must submit
    async fn outstanding_fills(&self, intent: &str) -> Result<u64, LedgerError>;

    async fn fill(&self, intent: &str, expected_sequence: u64)
        -> Result<FillReceipt, LedgerError>;

    async fn reclaim(&self, intent: &str) -> Result<String, LedgerError>;

    async fn multi_fill(&self, entries: &[FillEntry]) -> Result<BatchReport, LedgerError>;

    async fn multi_reclaim(&self, intents: &[String]) -> Result<BatchReport, LedgerError>;
}
