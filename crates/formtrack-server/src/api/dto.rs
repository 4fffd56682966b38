//! Response bodies for the frame-upload API.
//!
//! Shapes are pinned to what the dashboard already parses, including the
//! `ok`/`msg` envelope and the em-dash issue sentinel.

use formtrack_core::{Assessment, Exercise, FormStatus};
use serde::Serialize;

/// `GET /` liveness body.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Always `true` when the backend answers
    pub ok: bool,
    /// Fixed liveness message
    pub msg: &'static str,
}

impl RootResponse {
    /// The one liveness payload the dashboard expects.
    #[must_use]
    pub fn backend_running() -> Self {
        Self {
            ok: true,
            msg: "Backend is running",
        }
    }
}

/// `GET /health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed health label
    pub status: &'static str,
}

impl HealthResponse {
    /// Healthy response.
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

/// `GET /status` body.
///
/// `running` refers to a server-side camera loop, which this deployment
/// does not have; frames arrive by upload.
#[derive(Debug, Serialize)]
pub struct ModeResponse {
    /// Whether a server-side capture loop is running (always `false`)
    pub running: bool,
    /// Ingestion mode label
    pub mode: &'static str,
    /// Total frames processed since startup
    pub frames_processed: u64,
}

impl ModeResponse {
    /// Frame-upload mode with the current frame counter.
    #[must_use]
    pub fn frame_upload(frames_processed: u64) -> Self {
        Self {
            running: false,
            mode: "frame-upload",
            frames_processed,
        }
    }
}

/// `POST /process-frame` body.
///
/// Both outcomes are HTTP 200: an undecodable image is a structured
/// `ok: false` answer, not a fault.
#[derive(Debug, Serialize)]
pub struct ProcessFrameResponse {
    /// Whether the frame was analyzed
    pub ok: bool,
    /// Diagnostic message, only present when `ok` is `false`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<&'static str>,
    /// Classified exercise label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
    /// Form verdict label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FormStatus>,
    /// Issue text, em-dash sentinel when form is correct
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl ProcessFrameResponse {
    /// The image bytes could not be decoded.
    #[must_use]
    pub fn invalid_image() -> Self {
        Self {
            ok: false,
            msg: Some("Invalid image"),
            exercise: None,
            status: None,
            issue: None,
        }
    }

    /// A frame was analyzed.
    #[must_use]
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            ok: true,
            msg: None,
            exercise: Some(assessment.exercise),
            status: Some(assessment.status),
            issue: Some(assessment.issue_label().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_body_is_pinned() {
        let json = serde_json::to_value(RootResponse::backend_running()).unwrap();
        assert_eq!(json, json!({ "ok": true, "msg": "Backend is running" }));
    }

    #[test]
    fn test_mode_body_is_pinned() {
        let json = serde_json::to_value(ModeResponse::frame_upload(7)).unwrap();
        assert_eq!(
            json,
            json!({ "running": false, "mode": "frame-upload", "frames_processed": 7 })
        );
    }

    #[test]
    fn test_invalid_image_body() {
        let json = serde_json::to_value(ProcessFrameResponse::invalid_image()).unwrap();
        assert_eq!(json, json!({ "ok": false, "msg": "Invalid image" }));
    }

    #[test]
    fn test_assessment_body_uses_dashboard_labels() {
        let assessment = Assessment::wrong(Exercise::BicepCurl, "Elbow lifted too high (cheating)");
        let json = serde_json::to_value(ProcessFrameResponse::from_assessment(&assessment)).unwrap();

        assert_eq!(
            json,
            json!({
                "ok": true,
                "exercise": "Bicep Curl",
                "status": "wrong",
                "issue": "Elbow lifted too high (cheating)"
            })
        );
    }

    #[test]
    fn test_correct_form_uses_issue_sentinel() {
        let assessment = Assessment::correct(Exercise::Squat);
        let json = serde_json::to_value(ProcessFrameResponse::from_assessment(&assessment)).unwrap();
        assert_eq!(json["issue"], "—");
    }
}
