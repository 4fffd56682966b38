//! Per-exercise form rules.
//!
//! Every rule compares one derived angle or one landmark pair against a
//! threshold. Squat and Deadlift stop at the first violated rule. Bicep
//! Curl and Shoulder Press evaluate every rule and report the last violated
//! one; that overwrite order is part of the contract with the dashboard and
//! is preserved deliberately.

use formtrack_core::{Assessment, BodyLandmark, Exercise, LandmarkFrame};

use crate::angles::JointAngles;
use crate::thresholds::FormThresholds;

/// Evaluates form for a classified exercise over one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormChecker {
    thresholds: FormThresholds,
}

impl FormChecker {
    /// Creates a checker with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker with custom thresholds.
    #[must_use]
    pub fn with_thresholds(thresholds: FormThresholds) -> Self {
        Self { thresholds }
    }

    /// Checks form for the given exercise label.
    ///
    /// The label is an input, not recomputed: callers may pair any label
    /// with any frame. Defaults to a correct assessment when no rule fires.
    #[must_use]
    pub fn check(
        &self,
        exercise: Exercise,
        frame: &LandmarkFrame,
        angles: &JointAngles,
    ) -> Assessment {
        let finding = match exercise {
            Exercise::Squat => self.check_squat(angles),
            Exercise::Deadlift => self.check_deadlift(angles),
            Exercise::BicepCurl => self.check_curl(frame, angles),
            Exercise::ShoulderPress => self.check_press(frame, angles),
        };

        match finding {
            Some(issue) => Assessment::wrong(exercise, issue),
            None => Assessment::correct(exercise),
        }
    }

    /// First violated rule wins.
    fn check_squat(&self, angles: &JointAngles) -> Option<&'static str> {
        let t = &self.thresholds;
        if angles.min_knee() > t.squat_knee_straight {
            Some("Not squatting (legs too straight)")
        } else if angles.min_knee() < t.squat_knee_deep {
            Some("Too deep / knee overbend")
        } else if angles.torso_lean > t.squat_torso_lean {
            Some("Back leaning too much")
        } else {
            None
        }
    }

    /// First violated rule wins.
    fn check_deadlift(&self, angles: &JointAngles) -> Option<&'static str> {
        let t = &self.thresholds;
        if angles.min_knee() < t.deadlift_knee_bend {
            Some("Knees bending too much (looks like squat)")
        } else if angles.torso_lean < t.deadlift_torso_min {
            Some("Not hinging (too upright)")
        } else if angles.torso_lean > t.deadlift_torso_max {
            Some("Back angle too aggressive (risk)")
        } else {
            None
        }
    }

    /// Every rule is evaluated; a later violation overwrites an earlier one.
    fn check_curl(&self, frame: &LandmarkFrame, angles: &JointAngles) -> Option<&'static str> {
        let t = &self.thresholds;

        let (_, l_shoulder_y) = frame.position(BodyLandmark::LeftShoulder);
        let (_, r_shoulder_y) = frame.position(BodyLandmark::RightShoulder);
        let (_, l_elbow_y) = frame.position(BodyLandmark::LeftElbow);
        let (_, r_elbow_y) = frame.position(BodyLandmark::RightElbow);
        let (_, l_wrist_y) = frame.position(BodyLandmark::LeftWrist);
        let (_, r_wrist_y) = frame.position(BodyLandmark::RightWrist);

        let mut finding = None;
        if l_elbow_y < l_shoulder_y + t.curl_elbow_rise
            || r_elbow_y < r_shoulder_y + t.curl_elbow_rise
        {
            finding = Some("Elbow lifted too high (cheating)");
        }
        if l_wrist_y < l_shoulder_y - t.curl_wrist_margin
            || r_wrist_y < r_shoulder_y - t.curl_wrist_margin
        {
            finding = Some("Wrist too high (not curl form)");
        }
        if angles.max_elbow() > t.curl_elbow_straight {
            finding = Some("Arms too straight (no curl)");
        }
        finding
    }

    /// Every rule is evaluated; a later violation overwrites an earlier one.
    fn check_press(&self, frame: &LandmarkFrame, angles: &JointAngles) -> Option<&'static str> {
        let t = &self.thresholds;

        let (_, l_shoulder_y) = frame.position(BodyLandmark::LeftShoulder);
        let (_, r_shoulder_y) = frame.position(BodyLandmark::RightShoulder);
        let (_, l_wrist_y) = frame.position(BodyLandmark::LeftWrist);
        let (_, r_wrist_y) = frame.position(BodyLandmark::RightWrist);

        let wrists_above = l_wrist_y < l_shoulder_y - t.press_wrist_margin
            || r_wrist_y < r_shoulder_y - t.press_wrist_margin;

        let mut finding = None;
        if !wrists_above {
            finding = Some("Press not overhead enough");
        }
        if angles.torso_lean > t.press_torso_lean {
            finding = Some("Leaning too much while pressing");
        }
        finding
    }
}
