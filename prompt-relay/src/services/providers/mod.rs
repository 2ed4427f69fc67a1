//! Generative-language provider abstraction.
//!
//! The relay talks to the upstream through [`GenerativeProvider`] so the
//! outbound HTTP client can be swapped for a stub in tests.

pub mod gemini;
pub mod mock;

use crate::models::GenerateContentResponse;
use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

/// Failure of the single outbound call.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Upstream request failed with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Failed to parse upstream response: {0}")]
    DecodeError(String),

    #[error("Invalid upstream endpoint: {0}")]
    InvalidEndpoint(String),
}

/// A text-generation backend.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Issue exactly one `generateContent` call for `prompt`.
    ///
    /// A 2xx response is decoded and returned as-is; deciding whether it
    /// holds usable text is up to the caller.
    async fn generate_content(
        &self,
        api_key: &Secret<String>,
        prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError>;
}
