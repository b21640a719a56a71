//! Handlers for the `/education` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::education::{CreateEducation, UpdateEducation};
use folio_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/education
///
/// Public. List all education entries, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = EducationRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/education
///
/// Admin only. Create a new education entry.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEducation>,
) -> AppResult<impl IntoResponse> {
    let entry = EducationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        education_id = entry.id,
        user_id = admin.user_id,
        "Education entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/education/{id}
///
/// Admin only. Partially update an education entry.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEducation>,
) -> AppResult<impl IntoResponse> {
    let entry = EducationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))?;

    tracing::info!(education_id = id, user_id = admin.user_id, "Education entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/education/{id}
///
/// Admin only. Delete an education entry.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EducationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }));
    }

    tracing::info!(education_id = id, user_id = admin.user_id, "Education entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
