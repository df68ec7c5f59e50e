//! Shared helpers for API integration tests: router construction, request
//! plumbing, and database seeding.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use promenade_api::config::ServerConfig;
use promenade_api::router::build_app_router;
use promenade_api::state::AppState;
use promenade_core::types::{DbId, Timestamp};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

/// Server configuration for tests; never binds a socket.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 5,
    }
}

/// Build the application router exactly as the binary does.
pub fn test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Issue a GET request and return status plus parsed JSON body.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Issue a POST request with a JSON body and return status plus parsed
/// JSON body.
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

pub async fn seed_organization(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO organizations (name, org_type) VALUES ($1, 'UCWDC') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_event(
    pool: &PgPool,
    organization_id: DbId,
    name: &str,
    deadline: Timestamp,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO events \
            (organization_id, name, start_date, end_date, registration_deadline) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id",
    )
    .bind(organization_id)
    .bind(name)
    .bind(deadline + Duration::days(30))
    .bind(deadline + Duration::days(32))
    .bind(deadline)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_configuration(pool: &PgPool, event_id: DbId) {
    sqlx::query(
        "INSERT INTO event_configurations \
            (event_id, age_divisions, skill_levels, dance_categories) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(event_id)
    // Stored out of display order; the configuration endpoint sorts on read.
    .bind(json!([
        { "id": "d2", "name": "Senior I", "min_age": 50, "display_order": 2 },
        { "id": "d1", "name": "Adult", "display_order": 1 },
    ]))
    .bind(json!([
        { "id": "l1", "name": "Newcomer", "display_order": 1 },
        { "id": "l2", "name": "Novice", "display_order": 2 },
    ]))
    .bind(json!([
        { "id": "c1", "name": "Smooth", "dances": ["Waltz", "Tango", "Foxtrot"] },
        { "id": "c2", "name": "Rhythm", "dances": ["Cha Cha", "Rumba"] },
    ]))
    .execute(pool)
    .await
    .unwrap();
}

/// Seed one open event with a configuration and return its id.
pub async fn seed_open_event(pool: &PgPool) -> DbId {
    let org_id = seed_organization(pool, "Starlight Dance Council").await;
    let event_id = seed_event(pool, org_id, "Harvest Ball", Utc::now() + Duration::days(14)).await;
    seed_configuration(pool, event_id).await;
    event_id
}

/// A complete, valid registration draft for `event_id`.
pub fn valid_draft(event_id: DbId) -> Value {
    json!({
        "event_id": event_id,
        "partnership": {
            "leader": {
                "first_name": "Alex",
                "last_name": "Reed",
                "email": "alex@example.com",
                "is_professional": true,
            },
            "follower": {
                "first_name": "Sam",
                "last_name": "Lane",
                "email": "sam@example.com",
            },
        },
        "selected_age_divisions": ["d1", "d2"],
        "selected_skill_levels": ["l1"],
        "selected_dances": [
            { "category_id": "c1", "dance": "Waltz" },
            { "category_id": "c1", "dance": "Tango" },
        ],
    })
}
