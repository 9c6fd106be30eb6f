//! HTTP API tests.
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use utc::count::Limits;
use utc::server::{create_router, AppState, ServerConfig};

fn router() -> Router {
    create_router(Arc::new(AppState::new(ServerConfig::default())))
}

fn router_with(config: ServerConfig) -> Router {
    create_router(Arc::new(AppState::new(config)))
}

async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/utc/v0/token-count")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, payload: Value) -> (StatusCode, Value) {
    post_raw(app, payload.to_string()).await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_error(body: &Value, code: &str) {
    assert_eq!(body["error"]["code"], code);
    assert!(body["error"]["message"].is_string());
    assert!(body["error"]["hint"].is_string());
    assert_eq!(body["meta"]["version"], utc::SPEC_VERSION);
    assert!(body["meta"]["utc_timestamp"].is_string());
    assert!(body["meta"]["processing_time_ms"].is_number());
}

#[tokio::test]
async fn test_token_count_success() {
    let (status, body) =
        post_json(router(), json!({"model": "gpt-4o", "text": "これはテストです"})).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["result"];
    assert_eq!(result["model"], "gpt-4o");
    assert_eq!(result["encoding"], "o200k_base");
    assert_eq!(result["char_count"], 8);
    assert!(result["token_count"].as_u64().unwrap() > 0);
    assert!(result["token_per_char"].is_f64());

    let meta = &body["meta"];
    assert_eq!(meta["input_language"], "ja");
    assert_eq!(meta["input_size_bytes"], 24);
    assert!(meta["token_density"].is_f64());
    assert_eq!(meta["model_family"], "openai");
    assert!(meta["processing_time_ms"].is_number());
    assert!(meta["utc_timestamp"].is_string());
    assert_eq!(meta["version"], utc::SPEC_VERSION);
}

#[tokio::test]
async fn test_empty_text_error() {
    let (status, body) = post_json(router(), json!({"model": "gpt-4o", "text": "   "})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, "EMPTY_TEXT");
}

#[tokio::test]
async fn test_unsupported_model_error() {
    let (status, body) = post_json(router(), json!({"model": "gpt-9x", "text": "test"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "UNSUPPORTED_MODEL");
    assert!(body["error"]["detail"].as_str().unwrap().contains("gpt-9x"));
}

#[tokio::test]
async fn test_payload_too_large_error() {
    let text = "a".repeat(100_001);
    let (status, body) = post_json(router(), json!({"model": "gpt-4o", "text": text})).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_error(&body, "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_configured_limits_apply() {
    let config = ServerConfig::default().with_limits(Limits {
        max_chars: 4,
        max_bytes: 1024,
    });
    let (status, body) =
        post_json(router_with(config), json!({"model": "gpt-4o", "text": "hello"})).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_error(&body, "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_body_over_limit_is_payload_too_large() {
    let config = ServerConfig::default().with_max_body_size(64);
    let text = "a".repeat(200);
    let (status, body) =
        post_json(router_with(config), json!({"model": "gpt-4o", "text": text})).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_error(&body, "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_wrong_types_are_invalid_type() {
    for payload in [
        json!({"model": 4, "text": "hello"}),
        json!({"model": "gpt-4o", "text": 12}),
        json!({"model": "gpt-4o", "text": null}),
        json!({"model": "gpt-4o"}),
        json!({"text": "hello"}),
        json!(["gpt-4o", "hello"]),
        // Type check wins over blank text
        json!({"model": 1, "text": "  "}),
    ] {
        let (status, body) = post_json(router(), payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_error(&body, "INVALID_TYPE");
    }
}

#[tokio::test]
async fn test_malformed_json_is_invalid_type() {
    let (status, body) = post_raw(router(), "{\"model\": \"gpt-4o\", ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "INVALID_TYPE");
}

#[tokio::test]
async fn test_missing_content_type_is_invalid_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/utc/v0/token-count")
        .body(Body::from(r#"{"model":"gpt-4o","text":"hi"}"#))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_error(&body, "INVALID_TYPE");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .method("POST")
        .uri("/utc/v0/token-count")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "abc-123")
        .body(Body::from(r#"{"model":"gpt-4o","text":"hi"}"#))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_request_id_generated_on_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/utc/v0/token-count")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"model":"gpt-9x","text":"hi"}"#))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_models_endpoint() {
    let (status, body) = get_json(router(), "/utc/v0/models").await;
    assert_eq!(status, StatusCode::OK);

    let models = body["models"].as_array().unwrap();
    assert_eq!(body["count"], models.len());
    assert!(models
        .iter()
        .any(|m| m["model"] == "gpt-4o" && m["encoding"] == "o200k_base" && m["family"] == "openai"));
}

#[tokio::test]
async fn test_health_and_status() {
    let (status, body) = get_json(router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "universal-token-counter");

    let (status, body) = get_json(router(), "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limits"]["max_chars"], 100_000);
    assert_eq!(body["limits"]["max_bytes"], 524_288);
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/utc/v1/token-count")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
