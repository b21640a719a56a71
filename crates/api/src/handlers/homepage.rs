//! Handlers for the `/homepage` resource (hero section content).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::homepage::UpsertHomepageContent;
use folio_db::repositories::HomepageRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/homepage
///
/// Public. Returns the live homepage content, or `data: null` before any has
/// been saved.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let content = HomepageRepo::get(&state.pool).await?;

    Ok(Json(DataResponse { data: content }))
}

/// PUT /api/v1/homepage
///
/// Admin only. Replaces the live homepage content. Empty optional strings are
/// normalized to NULL before storage.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertHomepageContent>,
) -> AppResult<impl IntoResponse> {
    let content = HomepageRepo::upsert(&state.pool, &input.normalized()).await?;

    tracing::info!(user_id = admin.user_id, "Homepage content updated");

    Ok(Json(DataResponse { data: content }))
}
