//! Axum request handlers.

use axum::extract::{Multipart, State};
use axum::Json;
use formtrack_core::{Assessment, Exercise};
use tracing::{debug, warn};

use super::dto::{HealthResponse, ModeResponse, ProcessFrameResponse, RootResponse};
use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// `GET /`: liveness probe the dashboard polls on connect.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::backend_running())
}

/// `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `GET /status`: reports the ingestion mode and frame counter.
pub async fn status(State(state): State<AppState>) -> Json<ModeResponse> {
    Json(ModeResponse::frame_upload(state.frames_processed()))
}

/// `POST /process-frame`: analyzes one uploaded camera frame.
///
/// The flow mirrors what the dashboard expects frame by frame: decode the
/// image, detect landmarks, classify and check form, persist, answer. A
/// frame with no detectable person still produces the default assessment
/// so the dashboard always has something current to show.
#[tracing::instrument(skip_all)]
pub async fn process_frame(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ProcessFrameResponse>> {
    let image = read_file_field(&mut multipart).await?;

    // Undecodable bytes are a soft failure, not an HTTP error.
    if image::load_from_memory(&image).is_err() {
        debug!(bytes = image.len(), "rejected undecodable frame");
        return Ok(Json(ProcessFrameResponse::invalid_image()));
    }

    let assessment = match state.provider().detect(&image).await? {
        Some(frame) => state.analyzer().analyze(&frame),
        None => Assessment::correct(Exercise::Squat),
    };

    let total = state.record_frame();
    debug!(
        frame = total,
        exercise = %assessment.exercise,
        status = %assessment.status,
        "frame analyzed"
    );

    // Persistence failures must not fail the request; the dashboard still
    // gets its answer and the next frame gets another chance.
    if let Err(err) = state.store().write_latest(&assessment).await {
        warn!(store = state.store().name(), error = %err, "latest write failed");
    }
    if assessment.is_wrong() {
        if let Err(err) = state.store().append_history(&assessment).await {
            warn!(store = state.store().name(), error = %err, "history append failed");
        }
    }

    Ok(Json(ProcessFrameResponse::from_assessment(&assessment)))
}

/// Pulls the uploaded image out of the `file` multipart field.
async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("unreadable file field: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(ApiError::bad_request("missing \"file\" field"))
}
