use axum::Router;
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;
use uuid::Uuid;

use vitrine::infrastructure::observability::{REQUEST_ID_HEADER, request_id_middleware};

fn app() -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_inbound_request_id_when_handling_then_it_is_echoed() {
    let request = Request::builder()
        .uri("/ping")
        .header(REQUEST_ID_HEADER, "req-42")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_a_uuid_is_minted() {
    let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();

    let minted = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(Uuid::parse_str(minted).is_ok());
}
