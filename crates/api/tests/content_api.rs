//! Integration tests for the singleton content resources
//! (`/about`, `/homepage`, `/settings`).

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, put_json, put_json_auth};
use sqlx::PgPool;

/// Before any content is saved, public GETs return `data: null`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_content_returns_null(pool: PgPool) {
    for uri in ["/api/v1/about", "/api/v1/homepage", "/api/v1/settings"] {
        let app = common::build_test_app(pool.clone()).await;
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        let json = body_json(response).await;
        assert!(json["data"].is_null(), "GET {uri} should return data: null");
    }
}

/// PUT /about requires an admin; unauthenticated requests get 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_put_requires_admin(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({
        "full_name": "Jane Doe",
        "profession": "Designer",
        "bio": "Short bio",
        "story": "Long story",
        "strengths": "Typography"
    });
    let response = put_json(app, "/api/v1/about", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// PUT then GET round-trips the about content, and a second PUT updates the
/// same logical record instead of growing the table.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_upsert_roundtrip(pool: PgPool) {
    let token = admin_token(&pool).await;

    let body = serde_json::json!({
        "full_name": "Jane Doe",
        "profession": "Designer",
        "bio": "Short bio",
        "story": "Long story",
        "strengths": "Typography, layout",
        "profile_image": "/uploads/me.png"
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(app, "/api/v1/about", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    let first_id = first["data"]["id"].as_i64().unwrap();

    // Second PUT changes the profession but keeps the same row.
    let body = serde_json::json!({
        "full_name": "Jane Doe",
        "profession": "Art Director",
        "bio": "Short bio",
        "story": "Long story",
        "strengths": "Typography, layout",
        "profile_image": "/uploads/me.png"
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(app, "/api/v1/about", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["data"]["id"].as_i64().unwrap(), first_id);
    assert_eq!(second["data"]["profession"], "Art Director");

    // Public GET sees the updated content.
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/about").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["profession"], "Art Director");
}

/// Homepage upsert normalizes empty optional strings to null.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_homepage_normalizes_empty_strings(pool: PgPool) {
    let token = admin_token(&pool).await;

    let body = serde_json::json!({
        "hero_title": "Welcome",
        "hero_subtitle": "   ",
        "cv_url": ""
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(app, "/api/v1/homepage", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/homepage").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["hero_title"], "Welcome");
    assert!(json["data"]["hero_subtitle"].is_null());
    assert!(json["data"]["cv_url"].is_null());
}

/// Settings PUT replaces the whole record: fields omitted from a later PUT
/// come back as null, not their previous values.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_put_replaces_whole_record(pool: PgPool) {
    let token = admin_token(&pool).await;

    let body = serde_json::json!({
        "email": "hello@site.com",
        "github_url": "https://github.com/janedoe",
        "linkedin_url": "https://linkedin.com/in/janedoe"
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(app, "/api/v1/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second PUT omits github_url and linkedin_url.
    let body = serde_json::json!({ "email": "hello@site.com" });
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(app, "/api/v1/settings", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/settings").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "hello@site.com");
    assert!(json["data"]["github_url"].is_null());
    assert!(json["data"]["linkedin_url"].is_null());
}
