pub mod auth;
pub mod catalog;
pub mod fallback;
pub mod health;
pub mod projects;
pub mod users;

use std::any::Any;

use axum::{
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    error::Error,
    middleware::{
        auth::require_bearer_auth,
        cors::{cors_layer, reject_disallowed_origin},
    },
    openapi, AppState,
};

/// Builds the full application: routes, JSON 404s, CORS policy, panic guard and tracing.
pub fn build_router(state: AppState) -> Router {
    let session_api: Router<AppState> = Router::new()
        .route(
            "/api/auth/me",
            get(auth::me).fallback(fallback::not_found),
        )
        .route_layer(from_fn_with_state(state.clone(), require_bearer_auth));

    let api: Router<AppState> = Router::new()
        .route(
            "/api/auth/login",
            post(auth::login).fallback(fallback::not_found),
        )
        .route(
            "/api/projects",
            get(projects::list_projects).fallback(fallback::not_found),
        )
        .route(
            "/api/projects/:id/issues",
            get(projects::list_project_issues).fallback(fallback::not_found),
        )
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(fallback::not_found),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(fallback::not_found),
        )
        .route(
            "/api/labels",
            get(catalog::list_labels).fallback(fallback::not_found),
        )
        .route(
            "/api/issue-types",
            get(catalog::list_issue_types).fallback(fallback::not_found),
        );

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(api)
        .merge(session_api)
        .fallback(fallback::not_found)
        .with_state(state.clone());

    with_http_layers(app, state)
}

/// Wraps a stateless router in the panic guard, CORS policy and request tracing.
/// CORS wraps the panic guard, so panic 500s carry CORS headers too.
pub fn with_http_layers(app: Router, state: AppState) -> Router {
    let allowed_origins = state.config.allowed_origins.clone();

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(allowed_origins))
        .layer(from_fn_with_state(state, reject_disallowed_origin))
        .layer(TraceLayer::new_for_http())
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    Error::Internal(format!("handler panicked: {}", detail)).into_response()
}
