//! Gemini provider implementation.
//!
//! Sends a single `generateContent` request over reqwest. The API key travels
//! as the `key` query parameter, so URLs are stripped from transport errors
//! before they are logged or surfaced.

use super::{GenerativeProvider, ProviderError};
use crate::models::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use metrics::counter;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Upper bound on how much of an upstream error body goes into one log line.
const MAX_LOGGED_ERROR_BODY: usize = 2048;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Scheme and host, e.g. `https://generativelanguage.googleapis.com`.
    pub api_base: String,
    pub api_version: String,
    pub model: String,
    /// Whole-request timeout for the outbound call.
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        // No idle pool: concurrent invocations never share a connection.
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the `generateContent` URL with the key appended.
    fn api_url(&self, api_key: &Secret<String>) -> Result<Url, ProviderError> {
        let endpoint = format!(
            "{}/{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.api_version,
            self.config.model
        );

        let mut url =
            Url::parse(&endpoint).map_err(|e| ProviderError::InvalidEndpoint(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("key", api_key.expose_secret());

        Ok(url)
    }
}

impl ProviderError {
    fn from_transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::DecodeError(err.to_string())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}

/// Cut `text` to at most `max` bytes on a char boundary.
fn truncate_for_log(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate_content(
        &self,
        api_key: &Secret<String>,
        prompt: &str,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let request = GenerateContentRequest::user_prompt(prompt);
        let url = self.api_url(api_key)?;

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                counter!("upstream_requests_total", "status" => "error").increment(1);
                ProviderError::from_transport(e)
            })?;

        let status = response.status();
        counter!("upstream_requests_total", "status" => status.as_u16().to_string()).increment(1);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                model = %self.config.model,
                status = status.as_u16(),
                body = %truncate_for_log(&error_text, MAX_LOGGED_ERROR_BODY),
                body_len = error_text.len(),
                "Gemini API error"
            );
            return Err(ProviderError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ProviderError::from_transport)?;

        serde_json::from_slice(&body).map_err(|e| ProviderError::DecodeError(e.to_string()))
    }
}
