use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::services::TranscribeError;
use crate::domain::{StoragePath, UploadId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts one multipart MP3 upload, stages it under a request-unique
/// path and runs the transcription pipeline. Per-chunk failures are part
/// of the transcript body; only an unprocessable upload is an error
/// response.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Transcription request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file provided".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("").to_string();
    if filename.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file selected".to_string(),
            }),
        )
            .into_response();
    }

    if !filename.to_ascii_lowercase().ends_with(".mp3") {
        tracing::warn!(filename = %filename, "Rejected upload with unsupported extension");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: "Only MP3 files are supported".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    let upload_id = UploadId::new();
    let path = StoragePath::new(&upload_id, &filename);

    tracing::debug!(
        upload_id = %upload_id.as_uuid(),
        filename = %filename,
        bytes = data.len(),
        "Audio upload staged for transcription"
    );

    if let Err(e) = state.staging_store.store(&path, data).await {
        tracing::error!(error = %e, "Failed to stage upload");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to store uploaded file".to_string(),
            }),
        )
            .into_response();
    }

    match state.transcription_service.transcribe_upload(&path).await {
        Ok(transcript) => {
            tracing::info!(
                upload_id = %upload_id.as_uuid(),
                lines = transcript.line_count(),
                "Transcription completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcription: transcript.render(),
                }),
            )
                .into_response()
        }
        Err(e @ (TranscribeError::Decode(_) | TranscribeError::EmptyInput)) => {
            tracing::warn!(error = %e, "Unprocessable audio upload");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Transcription failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
