//! Route definitions for the `/experience` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::experience;
use crate::state::AppState;

/// Routes mounted at `/experience`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (admin)
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(experience::list).post(experience::create))
        .route(
            "/{id}",
            put(experience::update).delete(experience::delete),
        )
}
