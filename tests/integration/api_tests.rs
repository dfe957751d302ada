/// End-to-end tests through the HTTP router
///
/// These drive the full stack (router -> handlers -> service -> SQLite)
/// against a throwaway database file per test.
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::util::ServiceExt;

use habit_tracker_api::{router, SqliteStorage};

fn test_app() -> (tempfile::TempDir, Router) {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let storage = Arc::new(SqliteStorage::new(temp_dir.path().join("habits.db")).unwrap());
    (temp_dir, router(storage))
}

/// Send one request through the router and decode the JSON response
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_list_habits() {
    let (_dir, app) = test_app();

    let (status, created) =
        send(&app, "POST", "/api/habits", Some(json!({"name": "Exercise"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Exercise");
    assert_eq!(created["completedDates"], json!([]));
    assert!(created["id"].is_string());

    let (status, listed) = send(&app, "GET", "/api/habits", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Exercise");
}

#[tokio::test]
async fn test_create_requires_name() {
    let (_dir, app) = test_app();

    let (status, body) = send(&app, "POST", "/api/habits", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusMessage"], "Habit name is required");
    assert_eq!(body["statusCode"], 400);

    let (status, _) = send(&app, "POST", "/api/habits", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_toggle_completion_lifecycle() {
    let (_dir, app) = test_app();

    let (_, created) =
        send(&app, "POST", "/api/habits", Some(json!({"name": "Exercise"}))).await;
    let id = created["id"].as_str().unwrap().to_string();
    let complete_uri = format!("/api/habits/{}/complete", id);

    // First toggle marks the date
    let (status, marked) = send(
        &app,
        "POST",
        &complete_uri,
        Some(json!({"date": "2024-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dates = marked["completedDates"].as_array().unwrap();
    assert_eq!(dates.len(), 1);
    assert_eq!(dates[0]["date"], "2024-01-01");
    assert_eq!(dates[0]["habitId"], id.as_str());

    // Second toggle for the same date unmarks it
    let (status, unmarked) = send(
        &app,
        "POST",
        &complete_uri,
        Some(json!({"date": "2024-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unmarked["completedDates"], json!([]));
}

#[tokio::test]
async fn test_toggle_requires_date() {
    let (_dir, app) = test_app();

    let (_, created) =
        send(&app, "POST", "/api/habits", Some(json!({"name": "Exercise"}))).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/habits/{}/complete", id),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusMessage"], "Date is required");
}

#[tokio::test]
async fn test_toggle_unknown_habit() {
    let (_dir, app) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/habits/00000000-0000-4000-8000-000000000000/complete",
        Some(json!({"date": "2024-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusMessage"], "Habit not found");
}

#[tokio::test]
async fn test_update_habit() {
    let (_dir, app) = test_app();

    let (_, created) =
        send(&app, "POST", "/api/habits", Some(json!({"name": "Old Name"}))).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/habits/{}", id),
        Some(json!({"name": "New Name"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "New Name");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/habits/{}", id),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_habit() {
    let (_dir, app) = test_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/habits/00000000-0000-4000-8000-000000000000",
        Some(json!({"name": "New Name"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusMessage"], "Habit not found");

    // A path id that isn't a UUID can't reference anything either
    let (status, _) = send(
        &app,
        "PUT",
        "/api/habits/not-a-uuid",
        Some(json!({"name": "New Name"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_habit() {
    let (_dir, app) = test_app();

    let (_, created) =
        send(&app, "POST", "/api/habits", Some(json!({"name": "Exercise"}))).await;
    let id = created["id"].as_str().unwrap();

    // Mark a completion so the cascade has something to remove
    send(
        &app,
        "POST",
        &format!("/api/habits/{}/complete", id),
        Some(json!({"date": "2024-01-01"})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", &format!("/api/habits/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Habit deleted successfully");

    let (_, listed) = send(&app, "GET", "/api/habits", None).await;
    assert_eq!(listed, json!([]));

    // Deleting again reports not found
    let (status, _) = send(&app, "DELETE", &format!("/api/habits/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
