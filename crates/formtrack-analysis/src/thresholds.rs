//! Threshold constants for classification and form rules.
//!
//! All values are hand-calibrated design parameters, not derived from data.
//! Angles are in degrees; margins are in normalized frame coordinates.

/// Thresholds used by the exercise classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierThresholds {
    /// Margin by which a wrist must sit above its shoulder to read as overhead
    pub press_wrist_margin: f32,
    /// Elbow angle below which an arm counts as flexed
    pub curl_elbow_flexion: f32,
    /// Margin used when ruling out overhead wrists for a curl
    pub curl_wrist_margin: f32,
    /// Knee angle above which a leg counts as straight
    pub deadlift_knee_straight: f32,
    /// Torso angle above which a straight-leg stance reads as a hinge
    pub deadlift_torso_lean: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            press_wrist_margin: 0.03,
            curl_elbow_flexion: 110.0,
            curl_wrist_margin: 0.01,
            deadlift_knee_straight: 140.0,
            deadlift_torso_lean: 25.0,
        }
    }
}

/// Thresholds used by the per-exercise form rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormThresholds {
    /// Squat: knee angle above which the lifter is not actually squatting
    pub squat_knee_straight: f32,
    /// Squat: knee angle below which the squat is too deep
    pub squat_knee_deep: f32,
    /// Squat: torso angle above which the back leans too much
    pub squat_torso_lean: f32,
    /// Deadlift: knee angle below which the pull looks like a squat
    pub deadlift_knee_bend: f32,
    /// Deadlift: torso angle below which the lifter is not hinging
    pub deadlift_torso_min: f32,
    /// Deadlift: torso angle above which the back angle is aggressive
    pub deadlift_torso_max: f32,
    /// Curl: margin below the shoulder line at which an elbow counts as lifted
    pub curl_elbow_rise: f32,
    /// Curl: margin by which a wrist above the shoulder breaks curl form
    pub curl_wrist_margin: f32,
    /// Curl: elbow angle above which the arms are too straight to be curling
    pub curl_elbow_straight: f32,
    /// Press: margin by which a wrist must clear the shoulder overhead
    pub press_wrist_margin: f32,
    /// Press: torso angle above which the lifter leans too much
    pub press_torso_lean: f32,
}

impl Default for FormThresholds {
    fn default() -> Self {
        Self {
            squat_knee_straight: 165.0,
            squat_knee_deep: 65.0,
            squat_torso_lean: 55.0,
            deadlift_knee_bend: 120.0,
            deadlift_torso_min: 20.0,
            deadlift_torso_max: 70.0,
            curl_elbow_rise: 0.05,
            curl_wrist_margin: 0.03,
            curl_elbow_straight: 175.0,
            press_wrist_margin: 0.03,
            press_torso_lean: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_defaults() {
        let t = ClassifierThresholds::default();
        assert_eq!(t.curl_elbow_flexion, 110.0);
        assert_eq!(t.deadlift_knee_straight, 140.0);
        assert!(t.press_wrist_margin > t.curl_wrist_margin);
    }

    #[test]
    fn test_form_defaults_are_ordered() {
        let t = FormThresholds::default();
        assert!(t.squat_knee_deep < t.squat_knee_straight);
        assert!(t.deadlift_torso_min < t.deadlift_torso_max);
        assert!(t.curl_elbow_straight > 90.0);
    }
}
