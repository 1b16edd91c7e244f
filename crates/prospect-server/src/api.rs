//! HTTP API implementing the remote key-value contract.
//!
//! Endpoints:
//! - GET /api/getData?userId=<id> - fetch the stored document
//! - POST /api/saveData?userId=<id> - replace-or-create the document
//! - GET /health - health check

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::store::DocumentStore;

/// App state
pub struct AppState {
    pub store: Mutex<DocumentStore>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the API router
pub fn create_router(store: DocumentStore) -> Router {
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    Router::new()
        .route("/health", get(health))
        .route("/api/getData", get(get_data))
        .route("/api/saveData", post(save_data))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fetch one user's document.
async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserIdQuery>,
) -> impl IntoResponse {
    let store = state.store.lock().unwrap();
    match store.get(&query.user_id) {
        Ok(Some(payload)) => (StatusCode::OK, Json(payload)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No data found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = %query.user_id, "failed to read document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to retrieve data" })),
            )
                .into_response()
        }
    }
}

/// Replace-or-create one user's document.
///
/// The body is taken as a raw string so a malformed payload maps to the
/// contract's 500 response instead of an extractor rejection.
async fn save_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserIdQuery>,
    body: String,
) -> impl IntoResponse {
    let save_failed = || {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to save data" })),
        )
            .into_response()
    };

    let data: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, user_id = %query.user_id, "invalid save payload");
            return save_failed();
        }
    };

    // Stored shape is {userId, ...body}: the id travels with the fields.
    let mut payload = json!({ "userId": query.user_id });
    match (payload.as_object_mut(), data.as_object()) {
        (Some(obj), Some(fields)) => {
            for (key, value) in fields {
                obj.insert(key.clone(), value.clone());
            }
        }
        _ => {
            tracing::error!(user_id = %query.user_id, "save payload is not a JSON object");
            return save_failed();
        }
    }

    let store = state.store.lock().unwrap();
    match store.upsert(&query.user_id, &payload) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Data saved successfully" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = %query.user_id, "failed to write document");
            save_failed()
        }
    }
}
