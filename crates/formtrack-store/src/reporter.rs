//! Change-driven reporting over any posture store.

use std::sync::Arc;

use formtrack_core::{Assessment, CoreResult, FormStatus, PostureStore};

/// What [`StateReporter::report`] did with an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Verdict unchanged since the last report, nothing written
    Skipped,
    /// Verdict changed, the store was updated
    Written,
}

/// Writes assessments to a store only when the form verdict changes.
///
/// The tracked state advances before any write is attempted, so a failed
/// write is not retried on the next identical frame. Each verdict
/// transition gets at most one write attempt; the caller logs failures and
/// keeps processing.
pub struct StateReporter {
    store: Arc<dyn PostureStore>,
    last_status: Option<FormStatus>,
}

impl StateReporter {
    /// Creates a reporter that has seen no verdict yet. The first report
    /// always writes.
    #[must_use]
    pub fn new(store: Arc<dyn PostureStore>) -> Self {
        Self {
            store,
            last_status: None,
        }
    }

    /// Returns the last verdict this reporter acted on.
    #[must_use]
    pub fn last_status(&self) -> Option<FormStatus> {
        self.last_status
    }

    /// Reports one assessment, writing only on a verdict transition.
    ///
    /// On a transition the latest document is rewritten, and a wrong
    /// verdict additionally appends a history entry.
    ///
    /// # Errors
    ///
    /// Propagates store errors. The transition still counts as reported.
    pub async fn report(&mut self, assessment: &Assessment) -> CoreResult<ReportOutcome> {
        if self.last_status == Some(assessment.status) {
            return Ok(ReportOutcome::Skipped);
        }

        // Advance first: a failed write must not re-arm on the next
        // identical frame.
        self.last_status = Some(assessment.status);

        self.store.write_latest(assessment).await?;
        if assessment.is_wrong() {
            self.store.append_history(assessment).await?;
        }

        Ok(ReportOutcome::Written)
    }
}
