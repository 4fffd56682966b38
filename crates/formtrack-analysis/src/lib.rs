//! # FormTrack Analysis
//!
//! Rule-based exercise classification and form checking over pose landmarks.
//!
//! The pipeline has two stages that share one set of derived joint angles:
//!
//! 1. **Classification** ([`ExerciseClassifier`]): an ordered rule chain maps
//!    a frame to one of the four recognized exercises. The first matching
//!    rule wins and `Squat` is the fallback.
//! 2. **Form checking** ([`FormChecker`]): per-exercise threshold rules
//!    produce a verdict and, when wrong, a human-readable issue.
//!
//! [`PostureAnalyzer`] composes both stages for the common one-call case.
//! Every stage is pure: no frame history, no smoothing, no randomness, so a
//! recorded session replays to identical assessments.
//!
//! ## Example
//!
//! ```rust
//! use formtrack_analysis::PostureAnalyzer;
//! use formtrack_core::{Landmark, LandmarkFrame};
//!
//! let analyzer = PostureAnalyzer::new();
//! let frame = LandmarkFrame::new([Landmark::new(0.5, 0.5, 1.0); 12]);
//! let assessment = analyzer.analyze(&frame);
//! println!("{} is {}", assessment.exercise, assessment.status);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod angles;
pub mod classifier;
pub mod form;
pub mod thresholds;

pub use analyzer::PostureAnalyzer;
pub use angles::JointAngles;
pub use classifier::ExerciseClassifier;
pub use form::FormChecker;
pub use thresholds::{ClassifierThresholds, FormThresholds};
