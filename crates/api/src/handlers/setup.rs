//! Handlers for the `/setup` resource (first-run admin creation).
//!
//! The setup endpoint is open only while the `users` table is empty. Once any
//! user exists it returns 409, so a deployed instance cannot be taken over by
//! re-running setup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::roles::ROLE_ADMIN;
use folio_db::models::user::{CreateUser, UserInfo};
use folio_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /setup`.
#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Response body for `GET /setup`.
#[derive(Debug, Serialize)]
pub struct SetupStatus {
    /// `true` when no users exist yet and setup is still allowed.
    pub needs_setup: bool,
}

/// GET /api/v1/setup
///
/// Report whether first-run setup is still required.
pub async fn status(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = UserRepo::count(&state.pool).await?;

    Ok(Json(DataResponse {
        data: SetupStatus {
            needs_setup: count == 0,
        },
    }))
}

/// POST /api/v1/setup
///
/// Create the first admin account. Returns 409 if any user already exists.
pub async fn run(
    State(state): State<AppState>,
    Json(input): Json<SetupRequest>,
) -> AppResult<impl IntoResponse> {
    let count = UserRepo::count(&state.pool).await?;
    if count > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Setup has already been completed".into(),
        )));
    }

    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email address is required".into(),
        )));
    }
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".into(),
        )));
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email.trim().to_string(),
            name: input.name.trim().to_string(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Initial admin account created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserInfo::from(&user),
        }),
    ))
}
