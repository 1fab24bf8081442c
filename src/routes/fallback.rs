use axum::{http::Uri, response::IntoResponse};

use crate::error::Error;

pub const API_NOT_FOUND: &str = "API endpoint not found";

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    if uri.path() == "/api" || uri.path().starts_with("/api/") {
        tracing::debug!(path = %uri.path(), "Unknown API endpoint");
        Error::NotFound(API_NOT_FOUND.to_string())
    } else {
        Error::NotFound("Not found".to_string())
    }
}
