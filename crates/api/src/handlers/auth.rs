//! Handlers for the `/auth` resource (login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::user::UserInfo;
use folio_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::cookie::{build_auth_cookie, clear_auth_cookie};
use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns the JWT in the body and also
/// sets it as an HttpOnly `auth-token` cookie for browser clients.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    // Find user by email. The same error message is used for unknown email
    // and wrong password so credentials cannot be enumerated.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    let expires_in = state.config.jwt.expiry_secs();
    let cookie = build_auth_cookie(&token, expires_in);

    let body = Json(AuthResponse {
        token,
        expires_in,
        user: UserInfo::from(&user),
    });

    Ok(([(SET_COOKIE, cookie)], body))
}

/// POST /api/v1/auth/logout
///
/// Clears the auth cookie. Stateless JWTs cannot be revoked server-side;
/// clients should also discard any stored token.
pub async fn logout(user: AuthUser) -> impl IntoResponse {
    tracing::info!(user_id = user.user_id, "User logged out");

    (
        StatusCode::OK,
        [(SET_COOKIE, clear_auth_cookie())],
        Json(json!({ "message": "Logged out" })),
    )
}

/// GET /api/v1/auth/me
///
/// Return the authenticated user's profile.
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: UserInfo::from(&record),
    }))
}
