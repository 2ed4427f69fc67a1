//! The prompt relay core.
//!
//! [`PromptRelay::handle`] turns one [`IncomingRequest`] into one
//! [`OutgoingResponse`], issuing at most one upstream call. It holds no
//! per-request state and is safe to share across concurrent invocations.

pub mod error;

pub use error::{RelayError, PROMPT_REQUIRED};

use crate::models::{text_envelope, IncomingRequest, OutgoingResponse, PromptPayload};
use crate::services::providers::GenerativeProvider;
use crate::services::ApiKeySource;
use axum::http::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct PromptRelay {
    key_source: Arc<dyn ApiKeySource>,
    provider: Arc<dyn GenerativeProvider>,
}

impl PromptRelay {
    pub fn new(key_source: Arc<dyn ApiKeySource>, provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            key_source,
            provider,
        }
    }

    /// Whether an API key is currently available.
    pub fn is_key_configured(&self) -> bool {
        self.key_source.api_key().is_some()
    }

    /// Relay one request. Never fails: every error becomes a structured
    /// response.
    pub async fn handle(&self, request: &IncomingRequest) -> OutgoingResponse {
        match self.relay(request).await {
            Ok(body) => OutgoingResponse::new(StatusCode::OK, body),
            Err(err) => err.into(),
        }
    }

    async fn relay(&self, request: &IncomingRequest) -> Result<Value, RelayError> {
        if request.method != Method::POST {
            return Err(RelayError::MethodNotAllowed);
        }

        let payload = PromptPayload::from_body(&request.body)
            .ok_or_else(|| RelayError::InvalidRequest(PROMPT_REQUIRED.to_string()))?;

        // Checked before any outbound call so a keyless request never leaves the process.
        let api_key = self
            .key_source
            .api_key()
            .ok_or(RelayError::ServerMisconfiguration)?;

        let response = self
            .provider
            .generate_content(&api_key, &payload.prompt)
            .await?;

        let text = response
            .first_text()
            .ok_or_else(|| RelayError::MalformedUpstreamResponse(response.missing_text_reason()))?;

        tracing::info!(
            prompt_len = payload.prompt.len(),
            response_len = text.len(),
            "Relayed prompt"
        );

        Ok(text_envelope(text))
    }
}
