//! Route definitions for the `/education` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Routes mounted at `/education`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (admin)
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(education::list).post(education::create))
        .route("/{id}", put(education::update).delete(education::delete))
}
