//! User CRUD endpoint tests.

use http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_returns_201_with_store_assigned_fields() {
    let app = TestApp::new();

    let (status, body) = app
        .request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": "A", "email": "a@x.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert!(body["id"].is_i64(), "id must be store-assigned");
    assert!(body["createdAt"].is_string(), "createdAt must be set");
    assert!(body.get("updatedAt").is_none(), "no update happened yet");
}

#[tokio::test]
async fn test_create_accepts_empty_strings() {
    let app = TestApp::new();

    let (status, body) = app
        .request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": "", "email": "" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
    assert_eq!(body["email"], "");
}

#[tokio::test]
async fn test_update_with_only_name_leaves_email_unchanged() {
    let app = TestApp::new();

    let (_, created) = app
        .request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": "A", "email": "a@x.com" })),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = app
        .request_json(
            Method::PUT,
            &format!("/users/{id}"),
            Some(json!({ "name": "B" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "B");
    assert_eq!(updated["email"], "a@x.com");
    assert!(updated["updatedAt"].is_string(), "updatedAt set on update");
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_get_missing_returns_404() {
    let app = TestApp::new();

    let (status, body) = app.request_json(Method::GET, "/users/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "User 42 not found");
}

#[tokio::test]
async fn test_delete_missing_returns_404_with_fixed_message() {
    let app = TestApp::new();

    let (status, body) = app.request_json(Method::DELETE, "/users/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": 404, "message": "User not found" }));
}

#[tokio::test]
async fn test_create_delete_get_roundtrip() {
    let app = TestApp::new();

    let (status, created) = app
        .request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": "A", "email": "a@x.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .request(Method::DELETE, &format!("/users/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty(), "delete must return an empty body");

    let (status, _) = app
        .request_json(Method::GET, &format!("/users/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_defaults_to_ten_records() {
    let app = TestApp::new();

    for i in 0..12 {
        app.request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": format!("u{i}"), "email": format!("u{i}@x.com") })),
        )
        .await;
    }

    let (status, body) = app.request_json(Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_list_passes_limit_and_offset_through() {
    let app = TestApp::new();

    for i in 0..5 {
        app.request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": format!("u{i}"), "email": format!("u{i}@x.com") })),
        )
        .await;
    }

    let (status, body) = app
        .request_json(Method::GET, "/users?limit=2&offset=3", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "u3");
}

#[tokio::test]
async fn test_list_is_empty_array_when_no_records() {
    let app = TestApp::new();

    let (status, body) = app.request_json(Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_create_body_returns_400_without_touching_store() {
    let app = TestApp::new();

    let (status, bytes) = app.request_raw(Method::POST, "/users", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "code": 400, "message": "invalid request body" }));
    assert_eq!(app.store.calls(), 0, "store must not be invoked");
}

#[tokio::test]
async fn test_absent_update_body_returns_400_without_touching_store() {
    let app = TestApp::new();

    let (status, bytes) = app.request(Method::PUT, "/users/1", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "invalid request body");
    assert_eq!(app.store.calls(), 0, "store must not be invoked");
}

#[tokio::test]
async fn test_store_failure_surfaces_as_500_with_message() {
    let app = TestApp::new();
    app.store.fail_with("connection reset");

    let (status, body) = app.request_json(Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "code": 500, "message": "connection reset" }));

    let (status, body) = app
        .request_json(
            Method::POST,
            "/users",
            Some(json!({ "name": "A", "email": "a@x.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "connection reset");

    let (status, body) = app
        .request_json(Method::PUT, "/users/1", Some(json!({ "name": "B" })))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "connection reset");
}

#[tokio::test]
async fn test_get_maps_any_store_failure_to_404() {
    let app = TestApp::new();
    app.store.fail_with("connection reset");

    let (status, body) = app.request_json(Method::GET, "/users/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": 404, "message": "connection reset" }));
}

#[tokio::test]
async fn test_delete_failure_carries_prefixed_detail() {
    let app = TestApp::new();
    app.store.fail_with("connection reset");

    let (status, body) = app.request_json(Method::DELETE, "/users/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "code": 500, "message": "Failed to delete user: connection reset" })
    );
}
