//! Integration tests for clients, campaigns and notes.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_client(app: Router, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/clients",
        json!({"name": name, "company": "Acme Co", "brand_voice": "Warm and direct"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_crud_lifecycle(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_client(app.clone(), "Acme").await;

    let response = get(app.clone(), &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Acme");
    assert_eq!(json["data"]["brand_voice"], "Warm and direct");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/clients/{id}"),
        json!({"industry": "Outdoor gear"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["industry"], "Outdoor gear");
    assert_eq!(json["data"]["name"], "Acme");

    let response = get(app.clone(), "/api/v1/clients").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = delete(app.clone(), &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Client not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_blank_name_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/clients", json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name must not be empty");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_invalid_website_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/clients",
        json!({"name": "Acme", "website": "not a url"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_client_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/v1/clients/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn campaign_lifecycle_under_client(pool: PgPool) {
    let app = build_test_app(pool);
    let client_id = create_client(app.clone(), "Acme").await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/clients/{client_id}/campaigns"),
        json!({"name": "Spring Sale", "campaign_type": "promotional", "offer": "20% off"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let campaign_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["client_id"], client_id);

    let response = get(app.clone(), &format!("/api/v1/clients/{client_id}/campaigns")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = put_json(
        app.clone(),
        &format!("/api/v1/campaigns/{campaign_id}"),
        json!({"status": "scheduled"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "scheduled");

    let response = delete(app.clone(), &format!("/api/v1/campaigns/{campaign_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/campaigns/{campaign_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Campaign not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn campaign_for_missing_client_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/v1/clients/424242/campaigns",
        json!({"name": "Spring Sale"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Client not found");

    let response = get(app, "/api/v1/clients/424242/campaigns").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn notes_create_list_delete(pool: PgPool) {
    let app = build_test_app(pool);
    let client_id = create_client(app.clone(), "Acme").await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/clients/{client_id}/notes"),
        json!({"content": "Prefers short subject lines"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let note_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/clients/{client_id}/notes")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["content"], "Prefers short subject lines");

    let response = delete(app.clone(), &format!("/api/v1/notes/{note_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app, &format!("/api/v1/notes/{note_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_note_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let client_id = create_client(app.clone(), "Acme").await;

    let response = post_json(
        app,
        &format!("/api/v1/clients/{client_id}/notes"),
        json!({"content": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Note content must not be empty");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_client_removes_campaigns_and_notes(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let client_id = create_client(app.clone(), "Acme").await;

    post_json(
        app.clone(),
        &format!("/api/v1/clients/{client_id}/campaigns"),
        json!({"name": "Spring Sale"}),
    )
    .await;
    post_json(
        app.clone(),
        &format!("/api/v1/clients/{client_id}/notes"),
        json!({"content": "VIP list only"}),
    )
    .await;

    let response = delete(app, &format!("/api/v1/clients/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let campaigns: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
        .fetch_one(&pool)
        .await
        .unwrap();
    let notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(campaigns, 0);
    assert_eq!(notes, 0);
}

// ---------------------------------------------------------------------------
// Flow strategy from a stored client
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn strategy_resolves_client_by_id(pool: PgPool) {
    let app = build_test_app(pool);
    let client_id = create_client(app.clone(), "Acme").await;

    let response = post_json(
        app,
        "/api/v1/flows/strategy",
        json!({
            "flowType": "welcome",
            "emailCount": 2,
            "offer": "10% off",
            "client": {"id": client_id},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["emailStrategies"].as_array().unwrap().len(), 2);
}
