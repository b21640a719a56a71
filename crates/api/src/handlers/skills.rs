//! Handlers for the `/skills` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, UpdateSkill};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Valid range for the skill proficiency level.
const LEVEL_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

fn validate_level(level: i32) -> AppResult<()> {
    if !LEVEL_RANGE.contains(&level) {
        return Err(AppError::Core(CoreError::Validation(
            "Skill level must be between 0 and 100".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/skills
///
/// Public. List all skills, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: skills }))
}

/// POST /api/v1/skills
///
/// Admin only. Create a new skill.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_level(input.level)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(skill_id = skill.id, user_id = admin.user_id, "Skill created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /api/v1/skills/{id}
///
/// Admin only. Partially update a skill.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    if let Some(level) = input.level {
        validate_level(level)?;
    }

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;

    tracing::info!(skill_id = id, user_id = admin.user_id, "Skill updated");

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/skills/{id}
///
/// Admin only. Delete a skill.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }));
    }

    tracing::info!(skill_id = id, user_id = admin.user_id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}
