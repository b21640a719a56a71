//! Handlers for the `/experience` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::experience::{CreateExperience, UpdateExperience};
use folio_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/experience
///
/// Public. List all work experience entries, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let experiences = ExperienceRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: experiences }))
}

/// POST /api/v1/experience
///
/// Admin only. Create a new experience entry.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    let experience = ExperienceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        experience_id = experience.id,
        user_id = admin.user_id,
        "Experience created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: experience })))
}

/// PUT /api/v1/experience/{id}
///
/// Admin only. Partially update an experience entry.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExperience>,
) -> AppResult<impl IntoResponse> {
    let experience = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }))?;

    tracing::info!(experience_id = id, user_id = admin.user_id, "Experience updated");

    Ok(Json(DataResponse { data: experience }))
}

/// DELETE /api/v1/experience/{id}
///
/// Admin only. Delete an experience entry.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ExperienceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }));
    }

    tracing::info!(experience_id = id, user_id = admin.user_id, "Experience deleted");

    Ok(StatusCode::NO_CONTENT)
}
