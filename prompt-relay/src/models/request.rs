//! Request and response shapes at the relay boundary.
//!
//! These are transport-neutral: the axum adapter in `handlers` builds an
//! [`IncomingRequest`] from the native request and renders the
//! [`OutgoingResponse`] back, so the relay core never sees axum types.

use axum::{
    body::Bytes,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Inbound request as seen by the relay: just the verb and the raw body.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub method: Method,
    pub body: Bytes,
}

impl IncomingRequest {
    pub fn new(method: Method, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            body: body.into(),
        }
    }
}

/// The validated prompt extracted from a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    pub prompt: String,
}

impl PromptPayload {
    /// Extract a non-empty string `prompt` from a JSON body.
    ///
    /// An empty body reads as `{}`. A body that is not valid JSON is treated
    /// the same as one without a prompt.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Request body is not valid JSON");
                return None;
            }
        };

        match value.get("prompt") {
            Some(Value::String(prompt)) if !prompt.is_empty() => Some(Self {
                prompt: prompt.clone(),
            }),
            _ => None,
        }
    }
}

/// Response produced by the relay. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl OutgoingResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// Error message from an `{ "error": ... }` body.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

impl IntoResponse for OutgoingResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
