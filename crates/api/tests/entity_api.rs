//! Integration tests for the list-based portfolio resources
//! (`/experience`, `/education`, `/certification`, `/skills`, `/gallery`).

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Full CRUD cycle on /experience: create, list publicly, update, delete.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_experience_crud_cycle(pool: PgPool) {
    let token = admin_token(&pool).await;

    // Create.
    let body = serde_json::json!({
        "title": "Senior Engineer",
        "company": "Acme",
        "location": "Berlin",
        "start_date": "2021-03-01",
        "current": true,
        "description": "Built things"
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/experience", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["company"], "Acme");
    assert_eq!(created["data"]["current"], true);
    assert!(created["data"]["end_date"].is_null());

    // Public list contains it.
    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/experience").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Partial update: only the title changes.
    let body = serde_json::json!({ "title": "Staff Engineer" });
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json_auth(app, &format!("/api/v1/experience/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["title"], "Staff Engineer");
    assert_eq!(updated["data"]["company"], "Acme");

    // Delete.
    let app = common::build_test_app(pool.clone()).await;
    let response = delete_auth(app, &format!("/api/v1/experience/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // List is empty again.
    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/v1/experience").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

/// Updating or deleting a missing id returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_experience_missing_id_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "title": "Nope" });
    let response = put_json_auth(app, "/api/v1/experience/9999", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool).await;
    let response = delete_auth(app, "/api/v1/experience/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Education entries keep their date and gpa fields through create.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_education_create(pool: PgPool) {
    let token = admin_token(&pool).await;

    let body = serde_json::json!({
        "degree": "BSc Computer Science",
        "institution": "TU Berlin",
        "start_date": "2015-10-01",
        "end_date": "2018-09-30",
        "gpa": "1.3"
    });
    let app = common::build_test_app(pool).await;
    let response = post_json_auth(app, "/api/v1/education", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["degree"], "BSc Computer Science");
    assert_eq!(json["data"]["start_date"], "2015-10-01");
    assert_eq!(json["data"]["gpa"], "1.3");
    assert_eq!(json["data"]["current"], false);
}

/// Certification create and partial update of the credential URL.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_certification_update(pool: PgPool) {
    let token = admin_token(&pool).await;

    let body = serde_json::json!({
        "title": "AWS Solutions Architect",
        "issuer": "Amazon",
        "issue_date": "2023-06-15"
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/certification", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let body = serde_json::json!({ "credential_url": "https://aws.example/cred/123" });
    let app = common::build_test_app(pool).await;
    let response = put_json_auth(app, &format!("/api/v1/certification/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["credential_url"], "https://aws.example/cred/123");
    assert_eq!(json["data"]["issuer"], "Amazon");
}

/// Skill levels outside 0..=100 are rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_level_validation(pool: PgPool) {
    let token = admin_token(&pool).await;

    let body = serde_json::json!({
        "name": "Rust",
        "category": "Languages",
        "level": 150
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/skills", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A valid level is accepted; an out-of-range update is rejected.
    let body = serde_json::json!({
        "name": "Rust",
        "category": "Languages",
        "level": 90
    });
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/skills", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let body = serde_json::json!({ "level": -5 });
    let app = common::build_test_app(pool).await;
    let response = put_json_auth(app, &format!("/api/v1/skills/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Gallery items are listed in sort_order, and creating one without an
/// image URL fails.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gallery_sort_order_and_validation(pool: PgPool) {
    let token = admin_token(&pool).await;

    for (title, sort_order) in [("Second", 2), ("First", 1)] {
        let body = serde_json::json!({
            "title": title,
            "image_url": format!("/uploads/{title}.png"),
            "sort_order": sort_order
        });
        let app = common::build_test_app(pool.clone()).await;
        let response = post_json_auth(app, "/api/v1/gallery", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/api/v1/gallery").await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items[0]["title"], "First");
    assert_eq!(items[1]["title"], "Second");

    let body = serde_json::json!({ "title": "Broken", "image_url": "  " });
    let app = common::build_test_app(pool).await;
    let response = post_json_auth(app, "/api/v1/gallery", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
