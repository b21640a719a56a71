//! Handlers for the `/settings` resource (site-wide contact and social links).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::models::settings::UpsertSiteSettings;
use folio_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Public. Returns the current site settings, or `data: null` before any have
/// been saved.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;

    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Admin only. Replaces the whole settings record; fields absent from the
/// request become NULL.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertSiteSettings>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(user_id = admin.user_id, "Site settings updated");

    Ok(Json(DataResponse { data: settings }))
}
