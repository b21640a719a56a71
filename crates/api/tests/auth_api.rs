//! HTTP-level integration tests for authentication endpoints.
//!
//! Tests cover login (header and cookie flows), logout, the `/auth/me`
//! endpoint, and admin-gate enforcement.

mod common;

use axum::http::{header, StatusCode};
use common::{
    body_json, create_admin, get, get_auth, get_with_cookie, login_token, post_json,
    post_json_auth,
};
use folio_api::auth::jwt::generate_token;
use sqlx::PgPool;

/// Successful login returns 200 with token, expiry, user info, and sets the
/// HttpOnly auth cookie.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_admin(&pool, "login@test.com").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "login@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the auth cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain token");
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["role"], "admin");
    assert!(
        json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_admin(&pool, "wrongpw@test.com").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent email returns 401 with the same message as a
/// wrong password.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

/// GET /auth/me works with a Bearer token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_with_bearer_token(pool: PgPool) {
    let (user, password) = create_admin(&pool, "me@test.com").await;

    let app = common::build_test_app(pool.clone()).await;
    let token = login_token(app, "me@test.com", &password).await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["email"], "me@test.com");
}

/// GET /auth/me also works with the auth cookie alone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_with_cookie(pool: PgPool) {
    let (_user, password) = create_admin(&pool, "cookie@test.com").await;

    let app = common::build_test_app(pool.clone()).await;
    let token = login_token(app, "cookie@test.com", &password).await;

    let app = common::build_test_app(pool).await;
    let response = get_with_cookie(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "cookie@test.com");
}

/// GET /auth/me without any credentials returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token is rejected with 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/auth/me", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout returns 200 and clears the auth cookie.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_clears_cookie(pool: PgPool) {
    let (_user, password) = create_admin(&pool, "logout@test.com").await;

    let app = common::build_test_app(pool.clone()).await;
    let token = login_token(app, "logout@test.com", &password).await;

    let app = common::build_test_app(pool).await;
    let response =
        post_json_auth(app, "/api/v1/auth/logout", serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout must clear the auth cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}

/// A valid token whose role is not `admin` is rejected with 403 on
/// admin-only endpoints, not 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_admin_role_forbidden(pool: PgPool) {
    // Minted with the shared test secret, so it passes signature validation
    // and fails only the role check.
    let config = common::test_config();
    let token = generate_token(42, "viewer@test.com", "viewer", &config.jwt)
        .expect("token generation should succeed");

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(
        app,
        "/api/v1/experience",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin role required");

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/contact", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admin-only write endpoints reject unauthenticated requests with 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_require_auth(pool: PgPool) {
    for uri in [
        "/api/v1/experience",
        "/api/v1/education",
        "/api/v1/certification",
        "/api/v1/skills",
        "/api/v1/gallery",
    ] {
        let app = common::build_test_app(pool.clone()).await;
        let response = post_json(app, uri, serde_json::json!({})).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "POST {uri} must require authentication"
        );
    }

    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/contact").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
