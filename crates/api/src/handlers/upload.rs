//! Handler for `POST /upload` (multipart image upload).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::upload::validate_upload;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored file.
    pub url: String,
    /// Storage key (path within the backend).
    pub key: String,
    /// Size of the stored file in bytes.
    pub size: usize,
}

/// POST /api/v1/upload
///
/// Admin only. Accepts a multipart form with a single `file` field. The file
/// must be an image and at most 5 MiB; the stored object's public URL is
/// returned for use in content records.
pub async fn upload(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::BadRequest("File field is missing a filename".into()))?;
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::BadRequest("File field is missing a content type".into()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {e}")))?;

        validate_upload(&content_type, bytes.len())?;

        let stored = state
            .storage
            .put(&filename, &content_type, bytes.to_vec())
            .await?;

        tracing::info!(
            key = %stored.key,
            size = bytes.len(),
            user_id = admin.user_id,
            "File uploaded"
        );

        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: UploadResponse {
                    url: stored.url,
                    key: stored.key,
                    size: bytes.len(),
                },
            }),
        ));
    }

    Err(AppError::Core(CoreError::Validation(
        "Multipart request must contain a 'file' field".into(),
    )))
}
