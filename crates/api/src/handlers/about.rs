//! Handlers for the `/about` resource (singleton page content).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::about::UpsertAboutContent;
use folio_db::repositories::AboutRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/about
///
/// Public. Returns the live about content, or `data: null` before any has
/// been saved.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let content = AboutRepo::get(&state.pool).await?;

    Ok(Json(DataResponse { data: content }))
}

/// PUT /api/v1/about
///
/// Admin only. Replaces the live about content (insert on first save).
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertAboutContent>,
) -> AppResult<impl IntoResponse> {
    let content = AboutRepo::upsert(&state.pool, &input).await?;

    tracing::info!(user_id = admin.user_id, "About content updated");

    Ok(Json(DataResponse { data: content }))
}
