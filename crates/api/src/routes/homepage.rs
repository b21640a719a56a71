//! Route definitions for the `/homepage` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::homepage;
use crate::state::AppState;

/// Routes mounted at `/homepage`.
///
/// ```text
/// GET /  -> homepage content (public)
/// PUT /  -> upsert homepage content (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(homepage::get).put(homepage::upsert))
}
