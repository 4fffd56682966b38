//! Single-frame posture analysis pipeline.

use formtrack_core::{Assessment, LandmarkFrame};

use crate::angles::JointAngles;
use crate::classifier::ExerciseClassifier;
use crate::form::FormChecker;
use crate::thresholds::{ClassifierThresholds, FormThresholds};

/// Classifies a frame and checks its form in one pass.
///
/// Holds no per-frame state: the same frame always yields the same
/// assessment, which keeps replaying a recorded session deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostureAnalyzer {
    classifier: ExerciseClassifier,
    checker: FormChecker,
}

impl PostureAnalyzer {
    /// Creates an analyzer with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom thresholds for both stages.
    #[must_use]
    pub fn with_thresholds(classifier: ClassifierThresholds, form: FormThresholds) -> Self {
        Self {
            classifier: ExerciseClassifier::with_thresholds(classifier),
            checker: FormChecker::with_thresholds(form),
        }
    }

    /// Analyzes one frame: derives angles, classifies, then checks form.
    ///
    /// Angles are computed once and shared by both stages.
    #[must_use]
    pub fn analyze(&self, frame: &LandmarkFrame) -> Assessment {
        let angles = JointAngles::from_frame(frame);
        let exercise = self.classifier.classify(frame, &angles);
        self.checker.check(exercise, frame, &angles)
    }
}
