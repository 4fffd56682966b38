//! Shared application state for the API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use formtrack_analysis::PostureAnalyzer;
use formtrack_core::{LandmarkProvider, PostureStore};

/// Shared state handed to every handler.
///
/// Cloning is cheap; the collaborators live behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    provider: Arc<dyn LandmarkProvider>,
    store: Arc<dyn PostureStore>,
    analyzer: PostureAnalyzer,
    frames_processed: AtomicU64,
}

impl AppState {
    /// Creates the state around a landmark provider and a store.
    #[must_use]
    pub fn new(provider: Arc<dyn LandmarkProvider>, store: Arc<dyn PostureStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                provider,
                store,
                analyzer: PostureAnalyzer::new(),
                frames_processed: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the landmark provider.
    #[must_use]
    pub fn provider(&self) -> &dyn LandmarkProvider {
        self.inner.provider.as_ref()
    }

    /// Returns the posture store.
    #[must_use]
    pub fn store(&self) -> &dyn PostureStore {
        self.inner.store.as_ref()
    }

    /// Returns the frame analyzer.
    #[must_use]
    pub fn analyzer(&self) -> &PostureAnalyzer {
        &self.inner.analyzer
    }

    /// Counts one processed frame and returns the new total.
    pub fn record_frame(&self) -> u64 {
        self.inner.frames_processed.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns how many frames have been processed so far.
    #[must_use]
    pub fn frames_processed(&self) -> u64 {
        self.inner.frames_processed.load(Ordering::Relaxed)
    }
}
