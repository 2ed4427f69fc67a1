#![allow(dead_code)]

use axum::http::Method;
use prompt_relay::models::IncomingRequest;
use prompt_relay::services::providers::mock::MockProvider;
use prompt_relay::services::StaticKeySource;
use prompt_relay::PromptRelay;
use serde_json::{json, Value};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn hello_body() -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": "Hello" }] } }] })
}

pub fn post_prompt(prompt: &str) -> IncomingRequest {
    IncomingRequest::new(Method::POST, json!({ "prompt": prompt }).to_string())
}

/// Relay with a fixed key over a shared mock so tests can count calls.
pub fn relay_with(provider: Arc<MockProvider>) -> PromptRelay {
    PromptRelay::new(Arc::new(StaticKeySource::new(TEST_API_KEY)), provider)
}

pub fn keyless_relay_with(provider: Arc<MockProvider>) -> PromptRelay {
    PromptRelay::new(Arc::new(StaticKeySource::missing()), provider)
}
