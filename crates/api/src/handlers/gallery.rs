//! Handlers for the `/gallery` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::gallery::{CreateGalleryItem, UpdateGalleryItem};
use folio_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/gallery
///
/// Public. List all gallery items ordered by `sort_order`.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = GalleryRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/gallery
///
/// Admin only. Create a new gallery item. The `image_url` usually comes from
/// a preceding `POST /upload`.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<impl IntoResponse> {
    if input.image_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "image_url is required".into(),
        )));
    }

    let item = GalleryRepo::create(&state.pool, &input).await?;

    tracing::info!(gallery_id = item.id, user_id = admin.user_id, "Gallery item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/gallery/{id}
///
/// Admin only. Partially update a gallery item.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<impl IntoResponse> {
    let item = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;

    tracing::info!(gallery_id = id, user_id = admin.user_id, "Gallery item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/gallery/{id}
///
/// Admin only. Delete a gallery item.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GalleryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }));
    }

    tracing::info!(gallery_id = id, user_id = admin.user_id, "Gallery item deleted");

    Ok(StatusCode::NO_CONTENT)
}
