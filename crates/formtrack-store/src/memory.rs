//! In-process stores: one that retains records and one that discards them.

use async_trait::async_trait;
use formtrack_core::{Assessment, CoreResult, PostureStore};
use parking_lot::RwLock;

use crate::record::PostureRecord;

#[derive(Debug, Default)]
struct MemoryInner {
    latest: Option<PostureRecord>,
    history: Vec<PostureRecord>,
}

/// Store that keeps everything in process memory.
///
/// Mirrors the remote layout: a single overwritten "latest" slot plus an
/// append-only history. Used by tests and by local runs that want to
/// inspect what would have been uploaded.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently written record, if any.
    #[must_use]
    pub fn latest(&self) -> Option<PostureRecord> {
        self.inner.read().latest.clone()
    }

    /// Returns a copy of the history entries in append order.
    #[must_use]
    pub fn history(&self) -> Vec<PostureRecord> {
        self.inner.read().history.clone()
    }

    /// Returns the number of history entries.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.inner.read().history.len()
    }
}

#[async_trait]
impl PostureStore for MemoryStore {
    async fn write_latest(&self, assessment: &Assessment) -> CoreResult<()> {
        let record = PostureRecord::now(assessment);
        self.inner.write().latest = Some(record);
        Ok(())
    }

    async fn append_history(&self, assessment: &Assessment) -> CoreResult<()> {
        let record = PostureRecord::now(assessment);
        self.inner.write().history.push(record);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Store that accepts every write and discards it.
///
/// Selected when no remote store is configured so the analysis loop can run
/// without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl NullStore {
    /// Creates the null store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PostureStore for NullStore {
    async fn write_latest(&self, _assessment: &Assessment) -> CoreResult<()> {
        Ok(())
    }

    async fn append_history(&self, _assessment: &Assessment) -> CoreResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtrack_core::{Exercise, FormStatus, NO_ISSUE};

    #[tokio::test]
    async fn test_memory_store_overwrites_latest() {
        let store = MemoryStore::new();
        store
            .write_latest(&Assessment::correct(Exercise::Squat))
            .await
            .unwrap();
        store
            .write_latest(&Assessment::wrong(Exercise::Squat, "Back leaning too much"))
            .await
            .unwrap();

        let latest = store.latest().unwrap();
        assert_eq!(latest.status, FormStatus::Wrong);
        assert_eq!(latest.issue, "Back leaning too much");
        assert_eq!(store.history_len(), 0);
    }

    #[tokio::test]
    async fn test_memory_store_appends_history_in_order() {
        let store = MemoryStore::new();
        store
            .append_history(&Assessment::wrong(Exercise::Deadlift, "Not hinging (too upright)"))
            .await
            .unwrap();
        store
            .append_history(&Assessment::correct(Exercise::Deadlift))
            .await
            .unwrap();

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].issue, "Not hinging (too upright)");
        assert_eq!(history[1].issue, NO_ISSUE);
    }

    #[tokio::test]
    async fn test_null_store_discards_everything() {
        let store = NullStore::new();
        store
            .write_latest(&Assessment::correct(Exercise::Squat))
            .await
            .unwrap();
        store
            .append_history(&Assessment::correct(Exercise::Squat))
            .await
            .unwrap();
        assert_eq!(store.name(), "null");
    }
}
