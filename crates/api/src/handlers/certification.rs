//! Handlers for the `/certification` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::certification::{CreateCertification, UpdateCertification};
use folio_db::repositories::CertificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/certification
///
/// Public. List all certifications, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let certifications = CertificationRepo::list(&state.pool).await?;

    Ok(Json(DataResponse {
        data: certifications,
    }))
}

/// POST /api/v1/certification
///
/// Admin only. Create a new certification.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCertification>,
) -> AppResult<impl IntoResponse> {
    let certification = CertificationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        certification_id = certification.id,
        user_id = admin.user_id,
        "Certification created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: certification,
        }),
    ))
}

/// PUT /api/v1/certification/{id}
///
/// Admin only. Partially update a certification.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCertification>,
) -> AppResult<impl IntoResponse> {
    let certification = CertificationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))?;

    tracing::info!(
        certification_id = id,
        user_id = admin.user_id,
        "Certification updated"
    );

    Ok(Json(DataResponse {
        data: certification,
    }))
}

/// DELETE /api/v1/certification/{id}
///
/// Admin only. Delete a certification.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CertificationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }));
    }

    tracing::info!(
        certification_id = id,
        user_id = admin.user_id,
        "Certification deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
