//! Rule-based exercise classification.
//!
//! A front-facing camera and a single lifter are assumed. The rules are
//! evaluated in a fixed order and the first match wins, so the classifier
//! is total: every frame yields exactly one label.

use formtrack_core::{BodyLandmark, Exercise, LandmarkFrame};

use crate::angles::JointAngles;
use crate::thresholds::ClassifierThresholds;

/// Ordered heuristic classifier over one frame's landmarks and angles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseClassifier {
    thresholds: ClassifierThresholds,
}

impl ExerciseClassifier {
    /// Creates a classifier with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with custom thresholds.
    #[must_use]
    pub fn with_thresholds(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// Classifies the activity in one frame.
    ///
    /// Rule order, first match wins:
    /// 1. a wrist clearly above its shoulder reads as a shoulder press;
    /// 2. a flexed elbow with both wrists below shoulder level reads as a
    ///    bicep curl;
    /// 3. straight knees with a leaning torso read as a deadlift;
    /// 4. everything else is a squat.
    #[must_use]
    pub fn classify(&self, frame: &LandmarkFrame, angles: &JointAngles) -> Exercise {
        let t = &self.thresholds;

        let (_, l_shoulder_y) = frame.position(BodyLandmark::LeftShoulder);
        let (_, r_shoulder_y) = frame.position(BodyLandmark::RightShoulder);
        let (_, l_wrist_y) = frame.position(BodyLandmark::LeftWrist);
        let (_, r_wrist_y) = frame.position(BodyLandmark::RightWrist);

        // Smaller y is higher in the image.
        let wrists_above_shoulders = l_wrist_y < l_shoulder_y - t.press_wrist_margin
            || r_wrist_y < r_shoulder_y - t.press_wrist_margin;
        if wrists_above_shoulders {
            return Exercise::ShoulderPress;
        }

        let elbow_flexed = angles.left_elbow < t.curl_elbow_flexion
            || angles.right_elbow < t.curl_elbow_flexion;
        let wrists_not_overhead = l_wrist_y > l_shoulder_y - t.curl_wrist_margin
            && r_wrist_y > r_shoulder_y - t.curl_wrist_margin;
        if elbow_flexed && wrists_not_overhead {
            return Exercise::BicepCurl;
        }

        let knees_straightish = angles.left_knee > t.deadlift_knee_straight
            && angles.right_knee > t.deadlift_knee_straight;
        if knees_straightish && angles.torso_lean > t.deadlift_torso_lean {
            return Exercise::Deadlift;
        }

        Exercise::Squat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtrack_core::Landmark;

    // Landmarks in BodyLandmark::all() order:
    // shoulders, elbows, wrists, hips, knees, ankles (left then right each).
    fn frame(points: [(f32, f32); 12]) -> LandmarkFrame {
        LandmarkFrame::new(points.map(|(x, y)| Landmark::new(x, y, 1.0)))
    }

    fn classify(frame: &LandmarkFrame) -> Exercise {
        let angles = JointAngles::from_frame(frame);
        ExerciseClassifier::new().classify(frame, &angles)
    }

    #[test]
    fn test_wrists_overhead_is_shoulder_press() {
        let pressing = frame([
            (0.42, 0.30),
            (0.58, 0.30),
            (0.41, 0.20),
            (0.59, 0.20),
            (0.42, 0.10),
            (0.58, 0.10),
            (0.44, 0.55),
            (0.56, 0.55),
            (0.44, 0.72),
            (0.56, 0.72),
            (0.44, 0.90),
            (0.56, 0.90),
        ]);
        assert_eq!(classify(&pressing), Exercise::ShoulderPress);
    }

    #[test]
    fn test_flexed_elbows_below_shoulders_is_bicep_curl() {
        let curling = frame([
            (0.42, 0.30),
            (0.58, 0.30),
            (0.40, 0.45),
            (0.60, 0.45),
            (0.42, 0.32),
            (0.58, 0.32),
            (0.44, 0.55),
            (0.56, 0.55),
            (0.44, 0.72),
            (0.56, 0.72),
            (0.44, 0.90),
            (0.56, 0.90),
        ]);
        assert_eq!(classify(&curling), Exercise::BicepCurl);
    }

    #[test]
    fn test_straight_knees_with_hinge_is_deadlift() {
        let hinged = frame([
            (0.28, 0.40),
            (0.32, 0.40),
            (0.30, 0.52),
            (0.34, 0.52),
            (0.32, 0.64),
            (0.36, 0.64),
            (0.48, 0.55),
            (0.52, 0.55),
            (0.46, 0.72),
            (0.50, 0.72),
            (0.45, 0.90),
            (0.49, 0.90),
        ]);
        assert_eq!(classify(&hinged), Exercise::Deadlift);
    }

    #[test]
    fn test_bent_knees_fall_through_to_squat() {
        let squatting = frame([
            (0.28, 0.40),
            (0.32, 0.40),
            (0.20, 0.46),
            (0.24, 0.46),
            (0.12, 0.50),
            (0.16, 0.50),
            (0.44, 0.55),
            (0.48, 0.55),
            (0.54, 0.66),
            (0.58, 0.66),
            (0.50, 0.86),
            (0.54, 0.86),
        ]);
        assert_eq!(classify(&squatting), Exercise::Squat);
    }

    #[test]
    fn test_deep_knee_bend_is_squat() {
        let deep = frame([
            (0.28, 0.49),
            (0.32, 0.49),
            (0.20, 0.50),
            (0.24, 0.50),
            (0.12, 0.51),
            (0.16, 0.51),
            (0.48, 0.53),
            (0.52, 0.53),
            (0.50, 0.60),
            (0.54, 0.60),
            (0.55, 0.53),
            (0.59, 0.53),
        ]);
        assert_eq!(classify(&deep), Exercise::Squat);
    }

    #[test]
    fn test_upright_straight_legs_read_as_deadlift() {
        // A vertical torso measures ~90 from horizontal, so standing tall
        // with locked knees satisfies the hinge rule.
        let standing = frame([
            (0.42, 0.30),
            (0.58, 0.30),
            (0.41, 0.42),
            (0.59, 0.42),
            (0.40, 0.54),
            (0.60, 0.54),
            (0.44, 0.55),
            (0.56, 0.55),
            (0.44, 0.72),
            (0.56, 0.72),
            (0.44, 0.90),
            (0.56, 0.90),
        ]);
        assert_eq!(classify(&standing), Exercise::Deadlift);
    }

    #[test]
    fn test_press_rule_beats_curl_rule() {
        // Left wrist pressed overhead while the right arm is mid-curl: the
        // overhead rule is checked first and wins.
        let mixed = frame([
            (0.42, 0.30),
            (0.58, 0.30),
            (0.43, 0.24),
            (0.60, 0.45),
            (0.42, 0.17),
            (0.58, 0.32),
            (0.44, 0.55),
            (0.56, 0.55),
            (0.44, 0.72),
            (0.56, 0.72),
            (0.44, 0.90),
            (0.56, 0.90),
        ]);
        assert_eq!(classify(&mixed), Exercise::ShoulderPress);
    }

    #[test]
    fn test_wrist_between_margins_blocks_curl() {
        // Left wrist 0.02 above the shoulder: not high enough for a press
        // (0.03 margin) but high enough to fail the curl's overhead check
        // (0.01 margin). With straight knees the frame reads as a deadlift.
        let between = frame([
            (0.42, 0.30),
            (0.58, 0.30),
            (0.40, 0.45),
            (0.59, 0.42),
            (0.41, 0.28),
            (0.60, 0.54),
            (0.44, 0.55),
            (0.56, 0.55),
            (0.44, 0.72),
            (0.56, 0.72),
            (0.44, 0.90),
            (0.56, 0.90),
        ]);
        assert_eq!(classify(&between), Exercise::Deadlift);
    }
}
