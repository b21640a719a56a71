//! Route definitions for the `/certification` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::certification;
use crate::state::AppState;

/// Routes mounted at `/certification`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (admin)
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(certification::list).post(certification::create))
        .route(
            "/{id}",
            put(certification::update).delete(certification::delete),
        )
}
