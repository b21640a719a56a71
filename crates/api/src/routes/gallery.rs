//! Route definitions for the `/gallery` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (admin)
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/{id}", put(gallery::update).delete(gallery::delete))
}
