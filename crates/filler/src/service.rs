use futures::stream::{self, StreamExt};
use std::sync::Arc;

use standing_intents_config::FillerConfig;

use crate::backoff::ExponentialBackoff;
use crate::error::{FillerError, LedgerError};
use crate::ledger::{FailedEntry, FillEntry, FillReceipt, IntentLedger};
use crate::planner::plan_batches;

/// Step of a bulk operation at which an intent was given up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The intent's sequence could not be read, so it was never submitted
    SequenceRead,
    /// The transaction carrying the intent's batch was not accepted
    Submission,
    /// The factory reported the entry at `index` of a committed batch as failed
    BatchEntry { index: u32 },
    /// The individual fill retried after a failed batch entry also failed
    Retry,
}

/// An intent a bulk operation could not apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentFailure {
    pub intent: String,
    pub stage: FailureStage,
    pub error: String,
}

impl IntentFailure {
    fn new(intent: impl Into<String>, stage: FailureStage, error: impl ToString) -> Self {
        Self {
            intent: intent.into(),
            stage,
            error: error.to_string(),
        }
    }
}

impl From<FailedEntry> for IntentFailure {
    fn from(entry: FailedEntry) -> Self {
        Self::new(
            entry.intent,
            FailureStage::BatchEntry { index: entry.index },
            entry.error,
        )
    }
}

/// Per-intent result of a bulk operation.
///
/// Every submitted intent lands in exactly one of the two lists, including those of batches
/// committed before a later batch failed to submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: Vec<String>,
    pub failed: Vec<IntentFailure>,
}

/// Drives fills and reclaims against the factory on behalf of one filler account
pub struct FillerService<L: IntentLedger> {
    ledger: Arc<L>,
    config: FillerConfig,
}

impl<L: IntentLedger> FillerService<L> {
    pub fn new(ledger: Arc<L>, config: FillerConfig) -> Self {
        Self { ledger, config }
    }

    pub fn config(&self) -> &FillerConfig {
        &self.config
    }

    /// Fill `intent` once, re-reading the sequence after each lost race.
    #[tracing::instrument(skip(self), fields(max_retries = self.config.max_sequence_retries))]
    pub async fn fill_with_retry(&self, intent: &str) -> Result<FillReceipt, FillerError> {
        let mut backoff = ExponentialBackoff::from_config(&self.config);

        loop {
            let sequence = self.ledger.outstanding_fills(intent).await?;

            match self.ledger.fill(intent, sequence).await {
                Ok(receipt) => {
                    tracing::info!(
                        intent = %intent,
                        sequence = receipt.sequence,
                        tx_hash = %receipt.tx_hash,
                        "intent filled"
                    );
                    return Ok(receipt);
                }
                Err(LedgerError::SequenceMismatch { expected, got }) => {
                    if backoff.attempts() >= self.config.max_sequence_retries {
                        tracing::warn!(
                            intent = %intent,
                            attempts = backoff.attempts() + 1,
                            "sequence retries exhausted"
                        );
                        return Err(FillerError::RetriesExhausted {
                            intent: intent.to_string(),
                            attempts: backoff.attempts() + 1,
                        });
                    }

                    let delay = backoff.next_delay();
                    tracing::debug!(
                        intent = %intent,
                        expected,
                        got,
                        delay_ms = delay.as_millis() as u64,
                        "lost sequence race, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!(intent = %intent, error = %e, "fill failed");
                    return Err(e.into());
                }
            }
        }
    }

    /// Fill every intent once using batched `MultiFill` transactions.
    ///
    /// Sequences are read concurrently before submission. Entries the factory reports as
    /// failed are retried one at a time through [`Self::fill_with_retry`] when
    /// `retry_failed_entries` is set. A batch whose transaction is rejected is reported
    /// entry by entry and the remaining batches are still submitted.
    #[tracing::instrument(skip(self, intents), fields(count = intents.len()))]
    pub async fn fill_many(&self, intents: &[String]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        let reads: Vec<(String, Result<u64, LedgerError>)> = stream::iter(intents.iter().cloned())
            .map(|intent| {
                let ledger = Arc::clone(&self.ledger);
                async move {
                    let sequence = ledger.outstanding_fills(&intent).await;
                    (intent, sequence)
                }
            })
            .buffered(self.config.read_concurrency.max(1))
            .collect()
            .await;

        let mut entries = Vec::with_capacity(reads.len());
        for (intent, sequence) in reads {
            match sequence {
                Ok(expected_sequence) => entries.push(FillEntry {
                    intent,
                    expected_sequence,
                }),
                Err(e) => {
                    tracing::warn!(intent = %intent, error = %e, "could not read sequence");
                    outcome
                        .failed
                        .push(IntentFailure::new(intent, FailureStage::SequenceRead, e));
                }
            }
        }

        let mut retry = Vec::new();
        for batch in plan_batches(entries, self.config.max_batch_size, |e| e.intent.as_str()) {
            let report = match self.ledger.multi_fill(&batch).await {
                Ok(report) => report,
                Err(e) => {
                    tracing::warn!(submitted = batch.len(), error = %e, "multi_fill rejected");
                    outcome.failed.extend(batch.into_iter().map(|entry| {
                        IntentFailure::new(entry.intent, FailureStage::Submission, &e)
                    }));
                    continue;
                }
            };
            tracing::info!(
                tx_hash = %report.tx_hash,
                submitted = batch.len(),
                failed = report.failed.len(),
                "multi_fill submitted"
            );

            for (index, entry) in batch.into_iter().enumerate() {
                match report.failed.iter().find(|f| f.index as usize == index) {
                    None => outcome.succeeded.push(entry.intent),
                    Some(failed) if self.config.retry_failed_entries => {
                        tracing::debug!(
                            intent = %entry.intent,
                            error = %failed.error,
                            "batch entry failed, queued for retry"
                        );
                        retry.push(entry.intent);
                    }
                    Some(failed) => outcome.failed.push(failed.clone().into()),
                }
            }
        }

        for intent in retry {
            match self.fill_with_retry(&intent).await {
                Ok(_) => outcome.succeeded.push(intent),
                Err(e) => outcome
                    .failed
                    .push(IntentFailure::new(intent, FailureStage::Retry, e)),
            }
        }

        outcome
    }

    /// Reclaim one fill from each intent using batched `MultiReclaim` transactions
    #[tracing::instrument(skip(self, intents), fields(count = intents.len()))]
    pub async fn reclaim_many(&self, intents: &[String]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for batch in plan_batches(intents.to_vec(), self.config.max_batch_size, |s| s.as_str()) {
            let report = match self.ledger.multi_reclaim(&batch).await {
                Ok(report) => report,
                Err(e) => {
                    tracing::warn!(submitted = batch.len(), error = %e, "multi_reclaim rejected");
                    outcome.failed.extend(
                        batch
                            .into_iter()
                            .map(|intent| IntentFailure::new(intent, FailureStage::Submission, &e)),
                    );
                    continue;
                }
            };
            tracing::info!(
                tx_hash = %report.tx_hash,
                submitted = batch.len(),
                failed = report.failed.len(),
                "multi_reclaim submitted"
            );

            for (index, intent) in batch.into_iter().enumerate() {
                match report.failed.iter().find(|f| f.index as usize == index) {
                    None => outcome.succeeded.push(intent),
                    Some(failed) => outcome.failed.push(failed.clone().into()),
                }
            }
        }

        outcome
    }
}
