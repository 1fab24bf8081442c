use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::utils::time::now;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running"))
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "OK",
        "timestamp": now().to_rfc3339(),
        "message": "QA Bug Tracker Backend is running!",
    });
    (StatusCode::OK, Json(body))
}
