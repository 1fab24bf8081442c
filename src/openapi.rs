use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::auth_dto::{LoginPayload, LoginResponse, SessionResponse, SessionUser};
use crate::dto::user_dto::{CreateUserPayload, UpdateUserPayload, UserResponse};
use crate::models::catalog::{IssueType, Label};
use crate::models::project::{Issue, Project};
use crate::models::user::{Role, UserStatus};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "QA Tracker Backend", description = "Mock CRUD API for the QA bug tracker"),
    paths(
        routes::health::health,
        routes::auth::login,
        routes::auth::me,
        routes::projects::list_projects,
        routes::projects::list_project_issues,
        routes::users::list_users,
        routes::users::get_user,
        routes::users::create_user,
        routes::users::update_user,
        routes::users::delete_user,
        routes::catalog::list_labels,
        routes::catalog::list_issue_types,
    ),
    components(schemas(
        LoginPayload,
        LoginResponse,
        SessionUser,
        SessionResponse,
        CreateUserPayload,
        UpdateUserPayload,
        UserResponse,
        Role,
        UserStatus,
        Project,
        Issue,
        Label,
        IssueType,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
