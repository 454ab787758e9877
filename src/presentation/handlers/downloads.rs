use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::services::DownloadOutcome;
use crate::presentation::state::AppState;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub file_name: String,
    /// Marks the payload as absent. Without it an empty body is an empty file.
    #[serde(default)]
    pub absent: bool,
}

#[derive(Serialize)]
pub struct DownloadResponse {
    pub status: &'static str,
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<DownloadOutcome> for DownloadResponse {
    fn from(outcome: DownloadOutcome) -> Self {
        let status = outcome.as_str();
        match outcome {
            DownloadOutcome::Skipped => Self {
                status,
                file_name: None,
                reason: None,
            },
            DownloadOutcome::Triggered { file_name } => Self {
                status,
                file_name: Some(file_name),
                reason: None,
            },
            DownloadOutcome::Refused { file_name, reason } => Self {
                status,
                file_name: Some(file_name),
                reason: Some(reason),
            },
        }
    }
}

#[tracing::instrument(skip(state, params, body), fields(size_bytes = body.len()))]
pub async fn download_handler(
    State(state): State<AppState>,
    params: Result<Query<DownloadParams>, QueryRejection>,
    body: Bytes,
) -> Result<(StatusCode, Json<DownloadResponse>), ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let payload = if params.absent { None } else { Some(body) };

    let outcome = state
        .download_service
        .download_file(payload, &params.file_name)
        .await;

    Ok((StatusCode::OK, Json(DownloadResponse::from(outcome))))
}
