pub mod about;
pub mod auth;
pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod gallery;
pub mod health;
pub mod homepage;
pub mod settings;
pub mod setup;
pub mod skills;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login           login (public)
/// /auth/logout          logout (requires auth)
/// /auth/me              current user (requires auth)
///
/// /setup                status (GET, public), run setup (POST, open while no users exist)
///
/// /about                get (public), upsert (PUT, admin)
/// /homepage             get (public), upsert (PUT, admin)
/// /settings             get (public), upsert (PUT, admin)
///
/// /experience           list (public), create (admin)
/// /experience/{id}      update, delete (admin)
/// /education            list (public), create (admin)
/// /education/{id}       update, delete (admin)
/// /certification        list (public), create (admin)
/// /certification/{id}   update, delete (admin)
/// /skills               list (public), create (admin)
/// /skills/{id}          update, delete (admin)
/// /gallery              list (public), create (admin)
/// /gallery/{id}         update, delete (admin)
///
/// /contact              submit form (POST, public), list inbox (GET, admin)
/// /contact/{id}         set read state, delete (admin)
///
/// /upload               multipart image upload (POST, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/setup", setup::router())
        .nest("/about", about::router())
        .nest("/homepage", homepage::router())
        .nest("/settings", settings::router())
        .nest("/experience", experience::router())
        .nest("/education", education::router())
        .nest("/certification", certification::router())
        .nest("/skills", skills::router())
        .nest("/gallery", gallery::router())
        .nest("/contact", contact::router())
        .nest("/upload", upload::router())
}
