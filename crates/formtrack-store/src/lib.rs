//! # FormTrack Store
//!
//! Persistence backends and change-driven reporting for posture
//! assessments.
//!
//! Two remote-shaped projections exist: a single "latest" document that is
//! overwritten in place (the dashboard reads only this), and an append-only
//! history that receives one entry per wrong-form transition. Backends:
//!
//! - [`FirestoreStore`]: Firestore REST v1 over plain HTTPS
//! - [`MemoryStore`]: in-process, for tests and local inspection
//! - [`NullStore`]: accepts and discards, for running without persistence
//!
//! [`StateReporter`] sits in front of any backend and suppresses writes
//! until the form verdict changes, so a lifter holding good form generates
//! no traffic.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod firestore;
pub mod memory;
pub mod record;
pub mod reporter;

pub use firestore::{FirestoreConfig, FirestoreStore, ENV_PROJECT, ENV_TOKEN};
pub use memory::{MemoryStore, NullStore};
pub use record::PostureRecord;
pub use reporter::{ReportOutcome, StateReporter};

use std::sync::Arc;

use formtrack_core::{CoreResult, PostureStore};
use tracing::{info, warn};

/// Selects a posture store from the environment.
///
/// A fully configured Firestore backend wins. With no configuration at all
/// the [`NullStore`] is chosen and a single warning names the variables to
/// set; analysis then runs without persistence.
///
/// # Errors
///
/// Returns a configuration error when the Firestore settings are partial,
/// since silently dropping data behind a half-configured store would hide a
/// deployment mistake.
pub fn bootstrap_store() -> CoreResult<Arc<dyn PostureStore>> {
    match FirestoreConfig::from_env()? {
        Some(config) => {
            let store = FirestoreStore::new(config);
            info!(project = store.project_id(), "using firestore store");
            Ok(Arc::new(store))
        }
        None => {
            warn!(
                "no store configured ({ENV_PROJECT} / {ENV_TOKEN} unset), \
                 assessments will not be persisted"
            );
            Ok(Arc::new(NullStore))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtrack_core::{Assessment, Exercise, FormStatus, NO_ISSUE};

    #[tokio::test]
    async fn test_reporter_over_memory_store() {
        let store = Arc::new(MemoryStore::new());
        let mut reporter = StateReporter::new(store.clone());

        // correct -> correct -> wrong -> wrong -> correct
        let good = Assessment::correct(Exercise::Squat);
        let bad = Assessment::wrong(Exercise::Squat, "Back leaning too much");

        reporter.report(&good).await.unwrap();
        reporter.report(&good).await.unwrap();
        reporter.report(&bad).await.unwrap();
        reporter.report(&bad).await.unwrap();
        reporter.report(&good).await.unwrap();

        // Three transitions reached the store, one of them wrong.
        assert_eq!(store.history_len(), 1);
        assert_eq!(store.history()[0].issue, "Back leaning too much");

        let latest = store.latest().unwrap();
        assert_eq!(latest.status, FormStatus::Correct);
        assert_eq!(latest.issue, NO_ISSUE);
    }
}
