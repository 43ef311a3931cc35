//! HTTP handler tests, driven through the router.

use std::path::Path;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{build_router, AppState};
use crate::repository::{init_db, TaskRepository};

async fn test_app() -> Router {
    let db = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
    build_router(AppState::new(TaskRepository::new(db.connection())), None)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/api/todos", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_list_starts_empty() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_list() {
    let app = test_app().await;

    let created = create(&app, "  Write tests ").await;
    assert_eq!(created["name"], "Write tests");
    assert_eq!(created["completed"], false);
    assert!(created["id"].is_string());

    create(&app, "Ship it").await;

    let (_, body) = send(&app, Method::GET, "/api/todos", None).await;
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Write tests", "Ship it"]);
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/api/todos", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name must not be empty"));
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/api/todos", Some(json!({ "title": "wrong field" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_todo() {
    let app = test_app().await;
    let created = create(&app, "Look me up").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/todos/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Look me up");

    let (status, _) = send(&app, Method::GET, "/api/todos/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_toggles_and_renames() {
    let app = test_app().await;
    let created = create(&app, "Draft").await;
    let uri = format!("/api/todos/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);
    assert_eq!(body["name"], "Draft");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "name": "Final" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Final");
    assert_eq!(body["completed"], true);
    assert_eq!(body["id"], created["id"]);
}

#[tokio::test]
async fn test_patch_errors() {
    let app = test_app().await;
    let created = create(&app, "Stable").await;
    let uri = format!("/api/todos/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, "/api/todos/404", Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_todo() {
    let app = test_app().await;
    let keep = create(&app, "Keep").await;
    let drop = create(&app, "Drop").await;
    let uri = format!("/api/todos/{}", drop["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, body) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], keep["id"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_without_static_dir() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_static_dir_serves_index_for_spa_routes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>glass todo</html>").unwrap();

    let db = init_db(Path::new(":memory:")).await.unwrap();
    let app = build_router(AppState::new(TaskRepository::new(db.connection())), Some(dir.path()));

    let response = app
        .oneshot(Request::builder().uri("/some/client/route").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<html>glass todo</html>");
}
