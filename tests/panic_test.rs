mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use common::send;
use qa_tracker_backend::{
    config::Config,
    error::INTERNAL_SERVER_ERROR,
    routes::{handle_panic, with_http_layers},
    AppState,
};
use tower::ServiceExt;

async fn explode() -> &'static str {
    panic!("handler exploded")
}

fn panicking_app() -> Router {
    let state = AppState::new(Config::default()).expect("app state");
    with_http_layers(Router::new().route("/boom", get(explode)), state)
}

#[tokio::test]
async fn handler_panic_becomes_masked_500() {
    let app = panicking_app();

    let req = Request::builder()
        .uri("/boom")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("exploded"));
}

#[tokio::test]
async fn panic_response_keeps_cors_headers() {
    let app = panicking_app();

    let req = Request::builder()
        .uri("/boom")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}

#[test]
fn panic_payloads_of_any_type_are_masked() {
    for payload in [
        Box::new("static message") as Box<dyn std::any::Any + Send>,
        Box::new(String::from("owned message")),
        Box::new(42_u8),
    ] {
        let resp = handle_panic(payload);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
