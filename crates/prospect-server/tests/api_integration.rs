//! Integration tests for the HTTP key-value contract.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use prospect_server::{create_router, DocumentStore};
use serde_json::Value;
use tower::ServiceExt;

fn create_test_router() -> axum::Router {
    create_router(DocumentStore::open_memory().unwrap())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/getData?userId=user_missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No data found");
}

#[tokio::test]
async fn test_get_without_user_id_is_rejected() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/getData")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_then_get_round_trips() {
    let app = create_test_router();

    let body = r#"{"state":{"points":150,"level":1,"weekStartDate":"2025-11-03"},"actions":{"calls":{"count":3,"weeklyTarget":30}}}"#;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/saveData?userId=user_rt")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Data saved successfully");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/getData?userId=user_rt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // The stored document carries the id alongside the saved fields.
    assert_eq!(json["userId"], "user_rt");
    assert_eq!(json["state"]["points"], 150);
    assert_eq!(json["actions"]["calls"]["count"], 3);
}

#[tokio::test]
async fn test_second_save_replaces_wholesale() {
    let app = create_test_router();

    for body in [
        r#"{"state":{"points":50},"actions":{},"stale_marker":true}"#,
        r#"{"state":{"points":80},"actions":{}}"#,
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/saveData?userId=user_lww")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/getData?userId=user_lww")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    // Last write wins with no merge: the marker from the first save is gone.
    assert_eq!(json["state"]["points"], 80);
    assert!(json.get("stale_marker").is_none());
}

#[tokio::test]
async fn test_malformed_save_body_fails_per_contract() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/saveData?userId=user_bad")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to save data");
}
