//! Route definitions for the `/about` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// ```text
/// GET /  -> about content (public)
/// PUT /  -> upsert about content (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about::get).put(about::upsert))
}
