//! REST API for camera-frame posture analysis.
//!
//! ## Endpoints
//!
//! - `GET /` - Liveness probe (`{"ok": true, "msg": "Backend is running"}`)
//! - `GET /health` - Health check
//! - `GET /status` - Ingestion mode and frame counter
//! - `POST /process-frame` - Analyze one uploaded camera frame (multipart,
//!   `file` field)
//!
//! The dashboard is served from a different origin, so CORS is permissive.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use dto::{HealthResponse, ModeResponse, ProcessFrameResponse, RootResponse};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::AppState;

/// Builds the API router with all endpoints and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/status", get(handlers::status))
        .route("/process-frame", post(handlers::process_frame))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
