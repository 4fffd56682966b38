//! Core trait definitions for the FormTrack system.
//!
//! This module defines the seams between the analysis pipeline and its
//! external collaborators, enabling a modular and testable architecture.
//!
//! # Traits
//!
//! - [`LandmarkProvider`]: Extract pose landmarks from an encoded image
//! - [`LandmarkSource`]: Pull landmark frames one at a time in a local loop
//! - [`PostureStore`]: Publish assessment records to a document store
//!
//! The pose model and the document store are external dependencies. Nothing
//! in this workspace reimplements them; these traits are the whole contract.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Assessment, LandmarkFrame};

/// Extracts body landmarks from one encoded camera frame.
///
/// Implementations wrap an external pose model (typically a sidecar
/// service). `Ok(None)` means the model saw no person in the frame, which
/// is a normal outcome and not an error.
#[async_trait]
pub trait LandmarkProvider: Send + Sync {
    /// Runs landmark extraction on the given encoded image bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or answers with
    /// an undecodable payload.
    async fn detect(&self, image: &[u8]) -> CoreResult<Option<LandmarkFrame>>;

    /// Returns a short name identifying the provider, used in logs.
    fn name(&self) -> &'static str;
}

/// Supplies landmark frames one at a time to a local processing loop.
///
/// `Ok(None)` signals end of stream; the loop exits cleanly. A frame that
/// fails to decode is an `Err`, which callers treat as skippable.
pub trait LandmarkSource {
    /// Returns the next frame, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying source fails or a frame does
    /// not decode.
    fn next_frame(&mut self) -> CoreResult<Option<LandmarkFrame>>;
}

/// Publishes assessment records to an external document store.
///
/// The store holds a single named "latest" document the dashboard polls,
/// plus an append-only history of wrong-form records. Writes are
/// best-effort: callers log failures and continue.
#[async_trait]
pub trait PostureStore: Send + Sync {
    /// Upserts the "latest" document, merging into existing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the caller decides whether to
    /// continue.
    async fn write_latest(&self, assessment: &Assessment) -> CoreResult<()>;

    /// Appends an immutable record to the history collection.
    ///
    /// Callers invoke this only for wrong-form assessments.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the caller decides whether to
    /// continue.
    async fn append_history(&self, assessment: &Assessment) -> CoreResult<()>;

    /// Returns a short name identifying the store backend, used in logs.
    fn name(&self) -> &'static str;
}
