//! Route definitions for the `/setup` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::setup;
use crate::state::AppState;

/// Routes mounted at `/setup`.
///
/// ```text
/// GET  /  -> setup status (public)
/// POST /  -> create first admin (open only while no users exist)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(setup::status).post(setup::run))
}
