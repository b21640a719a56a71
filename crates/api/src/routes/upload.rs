//! Route definitions for the `/upload` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use folio_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Headroom on top of the file size limit for multipart framing overhead.
const BODY_LIMIT_OVERHEAD: usize = 64 * 1024;

/// Routes mounted at `/upload`.
///
/// The default axum body limit (2 MB) is raised so a maximum-size file plus
/// multipart framing fits; the per-file limit itself is enforced in the
/// handler.
///
/// ```text
/// POST /  -> multipart image upload (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + BODY_LIMIT_OVERHEAD))
}
