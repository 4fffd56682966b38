//! # FormTrack Core
//!
//! Core types, traits, and geometry for the FormTrack posture analysis
//! system.
//!
//! This crate provides the foundational building blocks used throughout the
//! FormTrack workspace, including:
//!
//! - **Core Data Types**: [`LandmarkFrame`], [`Landmark`], [`BodyLandmark`],
//!   [`Assessment`], [`Exercise`], and [`FormStatus`] for representing pose
//!   landmarks and posture assessment results.
//!
//! - **Geometry**: The [`geometry`] module with the joint-angle and
//!   line-angle computations every classification rule is built on.
//!
//! - **Error Types**: Comprehensive error handling via the [`error`] module,
//!   with specific error types for the external collaborators.
//!
//! - **Traits**: Core abstractions like [`LandmarkProvider`],
//!   [`LandmarkSource`], and [`PostureStore`] that define the contracts for
//!   landmark extraction, frame supply, and record publication.
//!
//! ## Example
//!
//! ```rust
//! use formtrack_core::{BodyLandmark, Landmark, LandmarkFrame};
//!
//! // A full pose-model output array, with the left knee filled in
//! let mut points = vec![Landmark::new(0.0, 0.0, 0.0); 33];
//! points[BodyLandmark::LeftKnee.pose_index()] = Landmark::new(0.4, 0.7, 0.9);
//!
//! let frame = LandmarkFrame::from_pose_points(&points).unwrap();
//! assert_eq!(frame.position(BodyLandmark::LeftKnee), (0.4, 0.7));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod traits;
pub mod types;

// Re-export commonly used types at the crate root
pub use error::{CoreError, CoreResult, ProviderError, StoreError};
pub use traits::{LandmarkProvider, LandmarkSource, PostureStore};
pub use types::{Assessment, BodyLandmark, Exercise, FormStatus, Landmark, LandmarkFrame};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of body landmarks the analysis tracks
pub const LANDMARK_COUNT: usize = 12;

/// Number of landmarks in the full pose-model output layout
pub const POSE_MODEL_LANDMARKS: usize = 33;

/// Default visibility threshold for landmark visibility checks
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Sentinel shown by the dashboard when an assessment carries no issue
pub const NO_ISSUE: &str = "—";

/// Prelude module for convenient imports.
///
/// ```rust
/// use formtrack_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult, ProviderError, StoreError};
    pub use crate::geometry::{joint_angle, line_angle};
    pub use crate::traits::{LandmarkProvider, LandmarkSource, PostureStore};
    pub use crate::types::{
        Assessment, BodyLandmark, Exercise, FormStatus, Landmark, LandmarkFrame,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_valid() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(LANDMARK_COUNT, types::BodyLandmark::all().len());
        assert!(POSE_MODEL_LANDMARKS > LANDMARK_COUNT);
        assert!(DEFAULT_VISIBILITY_THRESHOLD > 0.0);
        assert!(DEFAULT_VISIBILITY_THRESHOLD < 1.0);
    }
}
