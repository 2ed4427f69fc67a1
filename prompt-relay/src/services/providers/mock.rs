//! Mock provider implementation for testing.

use super::{GenerativeProvider, ProviderError};
use crate::models::GenerateContentResponse;
use async_trait::async_trait;
use secrecy::Secret;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

enum MockReply {
    Body(Value),
    Status(u16),
    Network(String),
}

/// Deterministic provider that answers every call the same way and counts
/// how many calls it received.
pub struct MockProvider {
    reply: MockReply,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Reply with a 2xx carrying `body`.
    pub fn responding(body: Value) -> Self {
        Self::with_reply(MockReply::Body(body))
    }

    /// Reply with a non-2xx upstream status.
    pub fn failing_with_status(status: u16) -> Self {
        Self::with_reply(MockReply::Status(status))
    }

    /// Fail before any response arrives.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Network(message.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of outbound calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate_content(
        &self,
        _api_key: &Secret<String>,
        _prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            MockReply::Body(body) => serde_json::from_value(body.clone())
                .map_err(|e| ProviderError::DecodeError(e.to_string())),
            MockReply::Status(status) => Err(ProviderError::UpstreamStatus { status: *status }),
            MockReply::Network(message) => Err(ProviderError::NetworkError(message.clone())),
        }
    }
}
