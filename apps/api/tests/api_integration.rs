//! End-to-end API integration tests
//!
//! These tests drive the complete HTTP router against the in-memory store:
//! - Developer creation, listing and detail lookup
//! - Editing and retirement flows
//! - Error responses and their stable codes

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dmaker_api::api::router::build_router;
use dmaker_api::application::DeveloperService;
use dmaker_api::domain::repositories::DeveloperRepository;
use dmaker_api::infrastructure::repositories::InMemoryDeveloperRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for oneshot

/// Setup test application over a fresh in-memory store
fn setup_app() -> (Router, InMemoryDeveloperRepository) {
    let repo = InMemoryDeveloperRepository::new();
    let service = DeveloperService::new(Arc::new(repo.clone()));
    (build_router(Arc::new(service)), repo)
}

/// Send a request and decode the JSON body (Null when empty)
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}

fn alice_payload() -> Value {
    json!({
        "member_id": "m-alice",
        "name": "Alice",
        "age": 34,
        "developer_level": "SENIOR",
        "developer_skill_type": "BACK_END",
        "experience_years": 12
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_developer() {
    let (app, repo) = setup_app();

    let (status, json) = send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["member_id"], "m-alice");
    assert_eq!(json["developer_level"], "SENIOR");
    assert_eq!(json["developer_skill_type"], "BACK_END");
    assert_eq!(json["experience_years"], 12);

    // Verify in store
    let stored = repo.find_by_member_id("m-alice").await.unwrap();
    assert!(stored.is_some(), "Developer should be persisted");
}

#[tokio::test]
async fn test_create_duplicate_member_id_conflicts() {
    let (app, _) = setup_app();

    send(&app, "POST", "/create-developer", Some(alice_payload())).await;
    let (status, json) = send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "DUPLICATED_MEMBER_ID");

    let (_, list) = send(&app, "GET", "/developers", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_with_level_mismatch_is_bad_request() {
    let (app, _) = setup_app();

    let mut payload = alice_payload();
    payload["experience_years"] = json!(5);

    let (status, json) = send(&app, "POST", "/create-developer", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "LEVEL_EXPERIENCE_YEARS_NOT_MATCHED");
}

#[tokio::test]
async fn test_create_with_invalid_shape_is_bad_request() {
    let (app, repo) = setup_app();

    let mut payload = alice_payload();
    payload["age"] = json!(15);

    let (status, json) = send(&app, "POST", "/create-developer", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_REQUEST");
    assert!(repo.find_by_member_id("m-alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_developer_detail() {
    let (app, _) = setup_app();
    send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    let (status, json) = send(&app, "GET", "/developers/m-alice", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["member_id"], "m-alice");
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["age"], 34);
    assert_eq!(json["status_code"], "EMPLOYED");
    assert_eq!(json["experience_years"], 12);
}

#[tokio::test]
async fn test_get_unknown_developer_is_not_found() {
    let (app, _) = setup_app();

    let (status, json) = send(&app, "GET", "/developers/nobody", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NO_DEVELOPER");
}

#[tokio::test]
async fn test_edit_developer() {
    let (app, _) = setup_app();
    send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    let edit = json!({
        "developer_level": "MID",
        "developer_skill_type": "FULL_STACK",
        "experience_years": 8
    });
    let (status, json) = send(&app, "PUT", "/developer/m-alice", Some(edit)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["developer_level"], "MID");
    assert_eq!(json["developer_skill_type"], "FULL_STACK");
    assert_eq!(json["experience_years"], 8);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["age"], 34);
    assert_eq!(json["status_code"], "EMPLOYED");
}

#[tokio::test]
async fn test_edit_unknown_developer_is_not_found() {
    let (app, _) = setup_app();

    let edit = json!({
        "developer_level": "NEW",
        "developer_skill_type": "FRONT_END",
        "experience_years": 0
    });
    let (status, json) = send(&app, "PUT", "/developer/nobody", Some(edit)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NO_DEVELOPER");
}

#[tokio::test]
async fn test_delete_developer_retires_and_hides_from_list() {
    let (app, repo) = setup_app();
    send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    let mut bob = alice_payload();
    bob["member_id"] = json!("m-bob");
    bob["name"] = json!("Bob");
    send(&app, "POST", "/create-developer", Some(bob)).await;

    let (status, json) = send(&app, "DELETE", "/developer/m-alice", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status_code"], "RETIRED");
    assert_eq!(json["member_id"], "m-alice");

    let (_, list) = send(&app, "GET", "/developers", None).await;
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["member_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["m-bob"]);

    let snapshots = repo.find_retired_by_member_id("m-alice").await.unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].name(), "Alice");

    // Detail is still reachable after retirement
    let (status, json) = send(&app, "GET", "/developers/m-alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status_code"], "RETIRED");
}

#[tokio::test]
async fn test_delete_unknown_developer_is_not_found() {
    let (app, _) = setup_app();

    let (status, json) = send(&app, "DELETE", "/developer/nobody", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NO_DEVELOPER");
}

#[tokio::test]
async fn test_list_summary_shape() {
    let (app, _) = setup_app();
    send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    let (status, json) = send(&app, "GET", "/developers", None).await;

    assert_eq!(status, StatusCode::OK);
    let entry = &json.as_array().unwrap()[0];
    assert_eq!(entry["member_id"], "m-alice");
    assert_eq!(entry["developer_level"], "SENIOR");
    assert_eq!(entry["developer_skill_type"], "BACK_END");
    assert!(entry.get("name").is_none());
}

#[tokio::test]
async fn test_create_with_unknown_level_is_structured_bad_request() {
    let (app, repo) = setup_app();

    let mut payload = alice_payload();
    payload["developer_level"] = json!("JUNGIOR");

    let (status, json) = send(&app, "POST", "/create-developer", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_REQUEST");
    assert!(json["error"].is_string());
    assert!(repo.find_by_member_id("m-alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_edit_with_missing_field_is_structured_bad_request() {
    let (app, _) = setup_app();
    send(&app, "POST", "/create-developer", Some(alice_payload())).await;

    let edit = json!({ "developer_level": "MID" });
    let (status, json) = send(&app, "PUT", "/developer/m-alice", Some(edit)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_REQUEST");

    let (_, detail) = send(&app, "GET", "/developers/m-alice", None).await;
    assert_eq!(detail["developer_level"], "SENIOR");
}
