//! HTTP client for the external pose-detection sidecar.
//!
//! The pose model runs out of process. This client posts raw image bytes to
//! the sidecar and decodes its landmark array; the model itself stays a
//! black box behind one endpoint.

use async_trait::async_trait;
use formtrack_core::error::ProviderError;
use formtrack_core::{CoreResult, Landmark, LandmarkFrame, LandmarkProvider};
use serde::Deserialize;

/// Wire shape returned by the sidecar: a full pose array or `null` when no
/// person is visible. Points deserialize directly as [`Landmark`]s, with
/// `visibility` defaulting to zero when the model omits it.
#[derive(Debug, Deserialize)]
struct DetectResponse {
    landmarks: Option<Vec<Landmark>>,
}

/// Converts a sidecar response into a frame, treating `null` and an empty
/// array both as "no person detected".
fn frame_from_response(response: DetectResponse) -> CoreResult<Option<LandmarkFrame>> {
    let Some(points) = response.landmarks else {
        return Ok(None);
    };
    if points.is_empty() {
        return Ok(None);
    }
    LandmarkFrame::from_pose_points(&points).map(Some)
}

/// [`LandmarkProvider`] backed by a pose-model sidecar over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLandmarkProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpLandmarkProvider {
    /// Creates a provider posting to the given sidecar endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns the configured sidecar endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LandmarkProvider for HttpLandmarkProvider {
    async fn detect(&self, image: &[u8]) -> CoreResult<Option<LandmarkFrame>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::InvalidResponse {
                message: format!("pose sidecar returned HTTP {status}"),
            }
            .into());
        }

        let decoded: DetectResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    message: e.to_string(),
                })?;
        frame_from_response(decoded)
    }

    fn name(&self) -> &'static str {
        "http-pose"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtrack_core::{BodyLandmark, CoreError, POSE_MODEL_LANDMARKS};

    fn wire_points(count: usize) -> Vec<Landmark> {
        (0..count)
            .map(|i| Landmark::new(i as f32 / 100.0, 0.5, 0.9))
            .collect()
    }

    #[test]
    fn test_null_landmarks_is_no_detection() {
        let decoded: DetectResponse = serde_json::from_str(r#"{"landmarks":null}"#).unwrap();
        assert!(frame_from_response(decoded).unwrap().is_none());
    }

    #[test]
    fn test_empty_landmarks_is_no_detection() {
        let response = DetectResponse {
            landmarks: Some(Vec::new()),
        };
        assert!(frame_from_response(response).unwrap().is_none());
    }

    #[test]
    fn test_full_pose_array_selects_tracked_joints() {
        let response = DetectResponse {
            landmarks: Some(wire_points(POSE_MODEL_LANDMARKS)),
        };
        let frame = frame_from_response(response).unwrap().unwrap();

        // Point i was placed at x = i / 100.
        let (x, y) = frame.position(BodyLandmark::LeftKnee);
        assert!((x - 0.25).abs() < 1e-6);
        assert!((y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_short_pose_array_is_rejected() {
        let response = DetectResponse {
            landmarks: Some(wire_points(20)),
        };
        let err = frame_from_response(response).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientLandmarks { .. }));
    }

    #[test]
    fn test_missing_visibility_defaults_to_zero() {
        let decoded: DetectResponse =
            serde_json::from_str(r#"{"landmarks":[{"x":0.1,"y":0.2}]}"#).unwrap();
        let points = decoded.landmarks.unwrap();
        assert_eq!(points[0].visibility, 0.0);
    }
}
