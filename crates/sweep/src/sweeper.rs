//! The fetch-remediate-refetch loop.

use chrono::Utc;

use flowclean_client::orchestrator::OrchestratorApiError;
use flowclean_core::error::CoreError;
use flowclean_core::retention::{validate_page_size, RetentionWindow, RunFilter};
use flowclean_core::state::RunState;
use flowclean_core::types::RunId;

use crate::action::RemediationAction;
use crate::pacing::Pacing;
use crate::source::RunSource;

/// Outcome of one sweep: totals plus the IDs that failed remediation.
///
/// Failed runs are not retried within the run; they remain eligible and
/// will reappear in a later sweep unless their failure is permanent.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Runs successfully remediated across all batches.
    pub total_processed: u64,
    /// Number of non-empty pages processed.
    pub batches: u64,
    /// IDs whose remediation failed, across all batches.
    pub failed: Vec<RunId>,
}

/// Errors that abort a sweep.
///
/// Per-record remediation failures are absorbed into the report and are
/// deliberately absent here.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// Sweep parameters failed validation before any fetch.
    #[error("Invalid sweep parameters: {0}")]
    InvalidParams(#[from] CoreError),

    /// A page fetch failed. Fatal; no partial-success semantics at this
    /// level.
    #[error("Failed to fetch flow runs: {0}")]
    Fetch(#[source] OrchestratorApiError),
}

/// Drives the batch remediation sweep over a page source with an
/// injected per-record action.
pub struct Sweeper<S, A> {
    source: S,
    action: A,
    pacing: Pacing,
}

impl<S: RunSource, A: RemediationAction> Sweeper<S, A> {
    /// Create a sweeper with default pacing.
    pub fn new(source: S, action: A) -> Self {
        Self {
            source,
            action,
            pacing: Pacing::default(),
        }
    }

    /// Replace the pacing configuration.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Run one full sweep: remediate every run matching the predicate,
    /// page by page, until a fetch returns no candidates.
    ///
    /// The cutoff is computed once up front, so the predicate is fixed
    /// for the whole sweep. Remediated runs stop matching it; failed
    /// ones reappear in later pages until an empty page ends the loop.
    pub async fn sweep(
        &self,
        window: RetentionWindow,
        states: &[RunState],
        page_size: i64,
    ) -> Result<SweepReport, SweepError> {
        validate_page_size(page_size)?;
        let cutoff = window.cutoff_from(Utc::now());
        let filter = RunFilter::new(states.to_vec(), cutoff)?;

        tracing::info!(
            days = window.num_days(),
            %cutoff,
            page_size,
            action = self.action.verb(),
            "Sweep starting"
        );

        let mut report = SweepReport::default();

        let mut page = self
            .source
            .fetch_page(&filter, page_size)
            .await
            .map_err(SweepError::Fetch)?;

        while !page.is_empty() {
            let page_len = page.len();
            let mut batch_succeeded: u64 = 0;
            let mut batch_failed: Vec<RunId> = Vec::new();

            for run in &page {
                match self.action.remediate(run).await {
                    Ok(()) => {
                        report.total_processed += 1;
                        batch_succeeded += 1;
                        // Rate limiting counts successes only; a batch of
                        // failures runs unthrottled until the next fetch.
                        if self.pacing.pause_every > 0
                            && batch_succeeded % self.pacing.pause_every == 0
                        {
                            tokio::time::sleep(self.pacing.intra_batch_pause).await;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(
                            run_id = %run.id,
                            action = self.action.verb(),
                            error = %e,
                            "Failed to remediate flow run"
                        );
                        batch_failed.push(run.id);
                    }
                }
            }

            tracing::info!(
                batch_succeeded,
                batch_total = page_len,
                total = report.total_processed,
                "Batch complete"
            );
            if !batch_failed.is_empty() {
                tracing::warn!(
                    batch_failed = batch_failed.len(),
                    "Some flow runs could not be remediated this batch"
                );
            }

            report.batches += 1;
            report.failed.extend(batch_failed);

            tokio::time::sleep(self.pacing.inter_batch_pause).await;

            page = self
                .source
                .fetch_page(&filter, page_size)
                .await
                .map_err(SweepError::Fetch)?;
        }

        tracing::info!(
            total = report.total_processed,
            batches = report.batches,
            failed = report.failed.len(),
            "Sweep complete"
        );

        Ok(report)
    }
}
