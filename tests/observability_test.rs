use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use taxdoc_analyzer::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, request_id_middleware, sanitize_prompt,
};

fn echo_router() -> Router {
    Router::new()
        .route(
            "/",
            get(|Extension(id): Extension<RequestId>| async move { id.0 }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_incoming_request_id_when_handled_then_it_is_propagated_and_echoed() {
    let response = echo_router()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_one_is_generated() {
    let response = echo_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(header).is_ok());
}

#[test]
fn given_json_requested_when_creating_tracing_config_then_json_is_enabled() {
    let config = TracingConfig::new("test", true);

    assert!(config.json_format);
    assert_eq!(config.environment, "test");
}

#[test]
fn given_verification_reply_with_secret_when_sanitizing_then_secret_is_masked() {
    let sanitized = sanitize_prompt("VALID: Yes\nnote api_key=abc123&x=1");

    assert!(sanitized.contains("api_key=[REDACTED]&x=1"));
    assert!(!sanitized.contains("abc123"));
}

#[test]
fn given_blank_request_id_header_when_reading_then_a_new_id_is_generated() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, "   ".parse().unwrap());

    let request_id = RequestId::from_headers(&headers);

    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}
