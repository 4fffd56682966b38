//! FormTrack backend library.
//!
//! This crate provides:
//! - The frame-upload REST API (router, handlers, error mapping)
//! - An HTTP landmark provider that talks to the pose-model sidecar

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod provider;

pub use api::{create_router, AppState};
pub use provider::HttpLandmarkProvider;
