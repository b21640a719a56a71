//! Handlers for the `/contact` resource.
//!
//! `POST` is the public contact form; everything else is the admin inbox.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact::{CreateContactMessage, SetMessageRead};
use folio_db::repositories::ContactRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/contact
///
/// Admin only. List all received messages, newest first.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let messages = ContactRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/contact
///
/// Public contact form submission. Validates name, email, and message.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let message = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// PUT /api/v1/contact/{id}
///
/// Admin only. Mark a message read or unread.
pub async fn set_read(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetMessageRead>,
) -> AppResult<impl IntoResponse> {
    let message = ContactRepo::set_read(&state.pool, id, input.is_read)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;

    tracing::info!(
        message_id = id,
        is_read = input.is_read,
        user_id = admin.user_id,
        "Contact message read state changed"
    );

    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/v1/contact/{id}
///
/// Admin only. Delete a message.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    tracing::info!(message_id = id, user_id = admin.user_id, "Contact message deleted");

    Ok(StatusCode::NO_CONTENT)
}
