use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    models::catalog::{IssueType, Label},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/labels",
    responses((status = 200, description = "Issue labels", body = [Label]))
)]
#[axum::debug_handler]
pub async fn list_labels(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog_service.labels())
}

#[utoipa::path(
    get,
    path = "/api/issue-types",
    responses((status = 200, description = "Issue types", body = [IssueType]))
)]
#[axum::debug_handler]
pub async fn list_issue_types(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog_service.issue_types())
}
