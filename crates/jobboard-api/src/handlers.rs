//! HTTP handlers.

pub mod accounts;
pub mod auth;
pub mod jobs;
pub mod responses;

use axum::Json;
use serde_json::{json, Value};

/// GET /health liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// GET /ready readiness probe.
pub async fn ready() -> Json<Value> {
    Json(json!({"status": "ready"}))
}
