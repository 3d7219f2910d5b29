//! # HTTP Routes
//!
//! ```text
//! POST /receipts/process       Receipt JSON ──► 200 { "id": "<uuid>" }
//!                                           └─► 400 { "error": "..." }
//!                                           └─► 413 { "error": "..." }
//! GET  /receipts/{id}/points   ──────────────► 200 { "points": 32 }
//!                                           └─► 404 { "error": "..." }
//! GET  /health                 ──────────────► 200 OK
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response to a successful points lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(raw) = payload.inspect_err(|rejection| {
        debug!(status = %rejection.status(), "Rejected receipt body");
    })?;

    let id = state.service.submit(raw)?;
    Ok(Json(ProcessResponse { id: id.to_string() }))
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.service.lookup(&id)?;
    Ok(Json(PointsResponse {
        points: points.value(),
    }))
}
