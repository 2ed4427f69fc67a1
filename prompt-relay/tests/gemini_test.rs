//! The real Gemini client against a wiremock upstream.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::{hello_body, post_prompt, TEST_API_KEY};
use prompt_relay::services::providers::gemini::{GeminiConfig, GeminiProvider};
use prompt_relay::services::providers::{GenerativeProvider, ProviderError};
use prompt_relay::services::StaticKeySource;
use prompt_relay::startup::build_router;
use prompt_relay::{AppState, PromptRelay};
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "test-model";
const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn provider(api_base: &str, timeout: Duration) -> GeminiProvider {
    GeminiProvider::new(GeminiConfig {
        api_base: api_base.to_string(),
        api_version: "v1beta".to_string(),
        model: MODEL.to_string(),
        timeout,
    })
    .expect("Failed to build provider")
}

fn relay(api_base: &str) -> PromptRelay {
    PromptRelay::new(
        Arc::new(StaticKeySource::new(TEST_API_KEY)),
        Arc::new(provider(api_base, Duration::from_secs(5))),
    )
}

fn key() -> Secret<String> {
    Secret::new(TEST_API_KEY.to_string())
}

#[tokio::test]
async fn sends_single_well_formed_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", TEST_API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Say hello" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(hello_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = relay(&server.uri()).handle(&post_prompt("Say hello")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, hello_body());
}

#[tokio::test]
async fn rate_limited_upstream_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({ "error": { "code": 429, "status": "RESOURCE_EXHAUSTED" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = relay(&server.uri()).handle(&post_prompt("hi")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.error_message().unwrap();
    assert_eq!(message, "Upstream request failed with status 429");
    assert!(!message.contains("RESOURCE_EXHAUSTED"));
}

#[tokio::test]
async fn upstream_status_is_reported_by_provider() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .generate_content(&key(), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::UpstreamStatus { status: 400 }));
}

#[tokio::test]
async fn empty_candidates_from_upstream_is_500() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = relay(&server.uri()).handle(&post_prompt("hi")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.error_message(),
        Some("Upstream returned no candidates")
    );
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = provider(&server.uri(), Duration::from_secs(5))
        .generate_content(&key(), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::DecodeError(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(hello_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = provider(&server.uri(), Duration::from_millis(200))
        .generate_content(&key(), "hi")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout));
}

#[tokio::test]
async fn transport_errors_do_not_leak_the_key() {
    // Nothing listens on port 1.
    let relay = relay("http://127.0.0.1:1");

    let response = relay.handle(&post_prompt("hi")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.error_message().unwrap();
    assert!(message.starts_with("Network error"), "{}", message);
    assert!(!message.contains(TEST_API_KEY), "{}", message);
}

#[tokio::test]
async fn router_relays_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hello" }] },
                "finishReason": "STOP"
            }],
            "modelVersion": MODEL
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_router(AppState {
        relay: relay(&server.uri()),
        metrics: None,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ask-gemini")
                .body(Body::from(r#"{"prompt":"Say hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, hello_body());
}
