use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    models::project::{Issue, Project},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, description = "Sample projects", body = [Project]))
)]
#[axum::debug_handler]
pub async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog_service.projects())
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}/issues",
    params(("id" = String, Path, description = "Project ID, echoed into each issue")),
    responses((status = 200, description = "Sample issues", body = [Issue]))
)]
#[axum::debug_handler]
pub async fn list_project_issues(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    Json(state.catalog_service.issues_for_project(&id))
}
