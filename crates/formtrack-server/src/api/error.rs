//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use formtrack_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can surface to the client.
///
/// Analysis never fails: a processed frame always yields an assessment.
/// What can fail is the request shape and the pose sidecar.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed upload (400)
    #[error("bad request: {message}")]
    BadRequest {
        /// What was wrong with the request
        message: String,
    },

    /// The pose sidecar was unreachable or answered garbage (502)
    #[error("pose detection failed: {message}")]
    DetectionFailed {
        /// Underlying failure
        message: String,
    },

    /// Anything else (500)
    #[error("internal error: {message}")]
    Internal {
        /// Underlying failure
        message: String,
    },
}

impl ApiError {
    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::DetectionFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::DetectionFailed { .. } => "DETECTION_FAILED",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Provider(e) => Self::DetectionFailed {
                message: e.to_string(),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_owned(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtrack_core::error::ProviderError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("no file").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DetectionFailed {
                message: "timeout".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_display_carries_the_message() {
        let err = ApiError::bad_request("missing \"file\" field");
        assert_eq!(err.to_string(), "bad request: missing \"file\" field");

        let err = ApiError::DetectionFailed {
            message: "sidecar down".into(),
        };
        assert_eq!(err.to_string(), "pose detection failed: sidecar down");
    }

    #[test]
    fn test_provider_errors_map_to_bad_gateway() {
        let core = CoreError::from(ProviderError::RequestFailed {
            message: "connection refused".into(),
        });
        let api = ApiError::from(core);

        assert_eq!(api.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(api.error_code(), "DETECTION_FAILED");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            error: "pose detection failed: timeout".into(),
            code: "DETECTION_FAILED".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "DETECTION_FAILED");
        assert!(json["error"].as_str().unwrap().contains("timeout"));
    }
}
