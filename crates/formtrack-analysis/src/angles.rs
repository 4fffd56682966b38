//! Joint angles derived from one landmark frame.

use formtrack_core::geometry::{joint_angle, line_angle};
use formtrack_core::{BodyLandmark, LandmarkFrame};

/// The five derived angles every classification and form rule reads.
///
/// Computed once per frame and shared between the classifier and the form
/// checker. Elbow angles use shoulder-elbow-wrist, knee angles use
/// hip-knee-ankle, and the torso angle is the incline of the
/// shoulder-midpoint to hip-midpoint segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAngles {
    /// Left elbow angle in degrees
    pub left_elbow: f32,
    /// Right elbow angle in degrees
    pub right_elbow: f32,
    /// Left knee angle in degrees
    pub left_knee: f32,
    /// Right knee angle in degrees
    pub right_knee: f32,
    /// Torso segment angle from horizontal in degrees
    pub torso_lean: f32,
}

impl JointAngles {
    /// Derives all angles from a landmark frame.
    #[must_use]
    pub fn from_frame(frame: &LandmarkFrame) -> Self {
        Self {
            left_elbow: joint_angle(
                frame.position(BodyLandmark::LeftShoulder),
                frame.position(BodyLandmark::LeftElbow),
                frame.position(BodyLandmark::LeftWrist),
            ),
            right_elbow: joint_angle(
                frame.position(BodyLandmark::RightShoulder),
                frame.position(BodyLandmark::RightElbow),
                frame.position(BodyLandmark::RightWrist),
            ),
            left_knee: joint_angle(
                frame.position(BodyLandmark::LeftHip),
                frame.position(BodyLandmark::LeftKnee),
                frame.position(BodyLandmark::LeftAnkle),
            ),
            right_knee: joint_angle(
                frame.position(BodyLandmark::RightHip),
                frame.position(BodyLandmark::RightKnee),
                frame.position(BodyLandmark::RightAnkle),
            ),
            torso_lean: line_angle(frame.shoulder_midpoint(), frame.hip_midpoint()),
        }
    }

    /// Returns the smaller of the two knee angles.
    #[must_use]
    pub fn min_knee(&self) -> f32 {
        self.left_knee.min(self.right_knee)
    }

    /// Returns the larger of the two elbow angles.
    #[must_use]
    pub fn max_elbow(&self) -> f32 {
        self.left_elbow.max(self.right_elbow)
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

    fn standing() -> LandmarkFrame {
        frame([
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
        ])
    }

    #[test]
    fn test_standing_angles() {
        let angles = JointAngles::from_frame(&standing());
        assert!(angles.left_knee > 175.0);
        assert!(angles.right_knee > 175.0);
        assert!(angles.left_elbow > 170.0);
        assert!(angles.right_elbow > 170.0);
        assert!((angles.torso_lean - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_min_knee_and_max_elbow() {
        let angles = JointAngles {
            left_elbow: 150.0,
            right_elbow: 40.0,
            left_knee: 170.0,
            right_knee: 95.0,
            torso_lean: 80.0,
        };
        assert_eq!(angles.min_knee(), 95.0);
        assert_eq!(angles.max_elbow(), 150.0);
    }

    #[test]
    fn test_hinged_torso_angle() {
        // Shoulders ahead of the hips: the segment flattens toward horizontal.
        let angles = JointAngles::from_frame(&frame([
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
        ]));
        assert!((angles.torso_lean - 36.87).abs() < 0.5);
        assert!(angles.min_knee() > 170.0);
    }
}
