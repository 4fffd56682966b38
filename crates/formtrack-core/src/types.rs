//! Core data types for the FormTrack system.
//!
//! This module defines the fundamental data structures used throughout the
//! FormTrack workspace for representing pose landmarks and posture
//! assessment results.
//!
//! # Type Categories
//!
//! - **Landmark Types**: [`BodyLandmark`], [`Landmark`], [`LandmarkFrame`]
//! - **Assessment Types**: [`Exercise`], [`FormStatus`], [`Assessment`]

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::{DEFAULT_VISIBILITY_THRESHOLD, LANDMARK_COUNT, NO_ISSUE};

// =============================================================================
// Landmark Types
// =============================================================================

/// The body points the analysis tracks, in the 33-point pose-model layout.
///
/// Discriminants equal the landmark indices the pose model emits, so a raw
/// model output array can be indexed directly via [`BodyLandmark::pose_index`].
/// Face, hand, and foot landmarks are not tracked; the analysis only reads
/// the twelve joints below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BodyLandmark {
    /// Left shoulder
    LeftShoulder = 11,
    /// Right shoulder
    RightShoulder = 12,
    /// Left elbow
    LeftElbow = 13,
    /// Right elbow
    RightElbow = 14,
    /// Left wrist
    LeftWrist = 15,
    /// Right wrist
    RightWrist = 16,
    /// Left hip
    LeftHip = 23,
    /// Right hip
    RightHip = 24,
    /// Left knee
    LeftKnee = 25,
    /// Right knee
    RightKnee = 26,
    /// Left ankle
    LeftAnkle = 27,
    /// Right ankle
    RightAnkle = 28,
}

/// Minimum pose-array length that covers every tracked landmark.
const MIN_POSE_POINTS: usize = BodyLandmark::RightAnkle as usize + 1;

impl BodyLandmark {
    /// Returns all tracked landmarks in frame-storage order.
    #[must_use]
    pub fn all() -> &'static [Self; LANDMARK_COUNT] {
        &[
            Self::LeftShoulder,
            Self::RightShoulder,
            Self::LeftElbow,
            Self::RightElbow,
            Self::LeftWrist,
            Self::RightWrist,
            Self::LeftHip,
            Self::RightHip,
            Self::LeftKnee,
            Self::RightKnee,
            Self::LeftAnkle,
            Self::RightAnkle,
        ]
    }

    /// Returns the landmark name as a string.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// Returns the index of this landmark in the pose model's output array.
    #[must_use]
    pub fn pose_index(&self) -> usize {
        *self as usize
    }

    /// Returns the position of this landmark within a [`LandmarkFrame`].
    #[must_use]
    pub(crate) fn frame_index(&self) -> usize {
        match self {
            Self::LeftShoulder => 0,
            Self::RightShoulder => 1,
            Self::LeftElbow => 2,
            Self::RightElbow => 3,
            Self::LeftWrist => 4,
            Self::RightWrist => 5,
            Self::LeftHip => 6,
            Self::RightHip => 7,
            Self::LeftKnee => 8,
            Self::RightKnee => 9,
            Self::LeftAnkle => 10,
            Self::RightAnkle => 11,
        }
    }

    /// Returns `true` if this is an upper body landmark.
    #[must_use]
    pub fn is_upper_body(&self) -> bool {
        matches!(
            self,
            Self::LeftShoulder
                | Self::RightShoulder
                | Self::LeftElbow
                | Self::RightElbow
                | Self::LeftWrist
                | Self::RightWrist
        )
    }

    /// Returns `true` if this is a lower body landmark.
    #[must_use]
    pub fn is_lower_body(&self) -> bool {
        !self.is_upper_body()
    }
}

impl TryFrom<u8> for BodyLandmark {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(Self::LeftShoulder),
            12 => Ok(Self::RightShoulder),
            13 => Ok(Self::LeftElbow),
            14 => Ok(Self::RightElbow),
            15 => Ok(Self::LeftWrist),
            16 => Ok(Self::RightWrist),
            23 => Ok(Self::LeftHip),
            24 => Ok(Self::RightHip),
            25 => Ok(Self::LeftKnee),
            26 => Ok(Self::RightKnee),
            27 => Ok(Self::LeftAnkle),
            28 => Ok(Self::RightAnkle),
            _ => Err(CoreError::UnknownLandmarkIndex { index: value }),
        }
    }
}

impl std::fmt::Display for BodyLandmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single 2D body landmark with visibility.
///
/// Coordinates are normalized to `[0.0, 1.0]` relative to the frame, with
/// `y` growing downward (a smaller `y` is higher in the image).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate (normalized 0.0-1.0)
    pub x: f32,
    /// Y coordinate (normalized 0.0-1.0, downward)
    pub y: f32,
    /// Detection visibility reported by the pose model (0.0-1.0)
    #[serde(default)]
    pub visibility: f32,
}

impl Landmark {
    /// Creates a new landmark.
    #[must_use]
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, visibility }
    }

    /// Returns `true` if the visibility clears the given threshold.
    #[must_use]
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility >= threshold
    }

    /// Returns the position as a tuple.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One frame's worth of tracked landmarks.
///
/// Produced once per camera frame by the external pose model, read by the
/// classifier and form checker, and discarded. Frames are never retained
/// across iterations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Creates a frame from landmarks in [`BodyLandmark::all`] order.
    #[must_use]
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Selects the tracked landmarks out of a full pose-model output array.
    ///
    /// The slice is indexed by [`BodyLandmark::pose_index`], so it must hold
    /// at least enough points to cover the right ankle.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InsufficientLandmarks`] if the slice is too short.
    pub fn from_pose_points(points: &[Landmark]) -> CoreResult<Self> {
        if points.len() < MIN_POSE_POINTS {
            return Err(CoreError::InsufficientLandmarks {
                required: MIN_POSE_POINTS,
                available: points.len(),
            });
        }

        let mut selected = [Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        for landmark in BodyLandmark::all() {
            selected[landmark.frame_index()] = points[landmark.pose_index()];
        }
        Ok(Self { points: selected })
    }

    /// Returns the landmark for a body point.
    #[must_use]
    pub fn get(&self, landmark: BodyLandmark) -> Landmark {
        self.points[landmark.frame_index()]
    }

    /// Returns the position of a body point as a tuple.
    #[must_use]
    pub fn position(&self, landmark: BodyLandmark) -> (f32, f32) {
        self.get(landmark).position()
    }

    /// Returns the midpoint between the two shoulders.
    #[must_use]
    pub fn shoulder_midpoint(&self) -> (f32, f32) {
        Self::midpoint(
            self.position(BodyLandmark::LeftShoulder),
            self.position(BodyLandmark::RightShoulder),
        )
    }

    /// Returns the midpoint between the two hips.
    #[must_use]
    pub fn hip_midpoint(&self) -> (f32, f32) {
        Self::midpoint(
            self.position(BodyLandmark::LeftHip),
            self.position(BodyLandmark::RightHip),
        )
    }

    /// Returns the lowest visibility across all tracked landmarks.
    #[must_use]
    pub fn min_visibility(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.visibility)
            .fold(f32::INFINITY, f32::min)
    }

    /// Returns `true` if every tracked landmark clears the default
    /// visibility threshold.
    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.min_visibility() >= DEFAULT_VISIBILITY_THRESHOLD
    }

    fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
        ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
    }
}

// =============================================================================
// Assessment Types
// =============================================================================

/// The activities the classifier can recognize.
///
/// Serialized as the dashboard labels (`"Bicep Curl"`, not `"BicepCurl"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    /// Squat (default when no other rule matches)
    Squat,
    /// Deadlift
    Deadlift,
    /// Bicep curl
    #[serde(rename = "Bicep Curl")]
    BicepCurl,
    /// Shoulder press
    #[serde(rename = "Shoulder Press")]
    ShoulderPress,
}

impl Exercise {
    /// Returns the human-readable label shown on the dashboard.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Deadlift => "Deadlift",
            Self::BicepCurl => "Bicep Curl",
            Self::ShoulderPress => "Shoulder Press",
        }
    }

    /// Returns all recognizable exercises.
    #[must_use]
    pub fn all() -> &'static [Self; 4] {
        &[
            Self::Squat,
            Self::Deadlift,
            Self::BicepCurl,
            Self::ShoulderPress,
        ]
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Binary form verdict for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    /// Form within thresholds
    Correct,
    /// At least one form rule violated
    Wrong,
}

impl FormStatus {
    /// Returns the wire label (`"correct"` / `"wrong"`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Wrong => "wrong",
        }
    }
}

impl std::fmt::Display for FormStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The full result of analyzing one frame.
///
/// Exists transiently per frame; the only persisted projections are the
/// store's "latest" document and, on wrong form, a history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Classified activity
    pub exercise: Exercise,
    /// Form verdict
    pub status: FormStatus,
    /// Description of the violated rule, absent when form is correct
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl Assessment {
    /// Creates a correct-form assessment with no issue.
    #[must_use]
    pub fn correct(exercise: Exercise) -> Self {
        Self {
            exercise,
            status: FormStatus::Correct,
            issue: None,
        }
    }

    /// Creates a wrong-form assessment carrying the violated rule.
    #[must_use]
    pub fn wrong(exercise: Exercise, issue: impl Into<String>) -> Self {
        Self {
            exercise,
            status: FormStatus::Wrong,
            issue: Some(issue.into()),
        }
    }

    /// Returns `true` if the form verdict is wrong.
    #[must_use]
    pub fn is_wrong(&self) -> bool {
        self.status == FormStatus::Wrong
    }

    /// Returns the issue text as shown on the dashboard, with the em-dash
    /// sentinel standing in for "no issue".
    #[must_use]
    pub fn issue_label(&self) -> &str {
        self.issue.as_deref().unwrap_or(NO_ISSUE)
    }
}
