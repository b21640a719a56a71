//! Route definitions for the `/contact` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// GET    /      -> list inbox (admin)
/// POST   /      -> submit contact form (public)
/// PUT    /{id}  -> mark read/unread (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route("/{id}", put(contact::set_read).delete(contact::delete))
}
