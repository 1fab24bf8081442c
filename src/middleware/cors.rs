use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, ORIGIN},
        request::Parts,
        HeaderName, HeaderValue, Method,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::Error;
use crate::AppState;

/// Origins matching any of these substrings are accepted without being listed.
pub const TRUSTED_ORIGIN_FRAGMENTS: [&str; 3] = ["netlify.app", "localhost", "127.0.0.1"];

pub const NOT_ALLOWED_BY_CORS: &str = "Not allowed by CORS";

/// Requests without an Origin header (curl, server-to-server) are always allowed.
pub fn is_origin_allowed(origin: Option<&str>, allow_list: &[String]) -> bool {
    let Some(origin) = origin else {
        return true;
    };
    TRUSTED_ORIGIN_FRAGMENTS
        .iter()
        .any(|fragment| origin.contains(fragment))
        || allow_list.iter().any(|allowed| allowed == origin)
}

pub fn cors_layer(allow_list: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| match origin.to_str() {
                Ok(origin) => is_origin_allowed(Some(origin), &allow_list),
                Err(_) => false,
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

pub async fn reject_disallowed_origin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(ORIGIN)
        .map(|value| value.to_str().unwrap_or_default());
    if !is_origin_allowed(origin, &state.config.allowed_origins) {
        tracing::warn!(origin = ?origin, "Rejected request from disallowed origin");
        return Error::Forbidden(NOT_ALLOWED_BY_CORS.to_string()).into_response();
    }
    next.run(req).await
}
