use crate::models::OutgoingResponse;
use crate::services::providers::ProviderError;
use axum::http::StatusCode;
use thiserror::Error;

pub const PROMPT_REQUIRED: &str = "prompt is required";

/// Every way a relay invocation can fail. Each variant maps to exactly one
/// client-visible status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("API key is not configured on the server")]
    ServerMisconfiguration,

    #[error("Upstream request failed with status {status}")]
    UpstreamFailure { status: u16 },

    #[error("{0}")]
    MalformedUpstreamResponse(String),

    #[error("{0}")]
    UnexpectedFailure(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::ServerMisconfiguration
            | RelayError::UpstreamFailure { .. }
            | RelayError::MalformedUpstreamResponse(_)
            | RelayError::UnexpectedFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side record of the failure. Upstream bodies are logged by the
    /// provider where they are read.
    fn log(&self) {
        match self {
            RelayError::MethodNotAllowed | RelayError::InvalidRequest(_) => {
                tracing::debug!(error = %self, "Rejected relay request");
            }
            RelayError::ServerMisconfiguration => {
                tracing::error!(fault = "configuration", error = %self, "Relay misconfigured");
            }
            RelayError::UpstreamFailure { status } => {
                tracing::error!(fault = "upstream", upstream_status = status, "Upstream request failed");
            }
            RelayError::MalformedUpstreamResponse(reason) => {
                tracing::warn!(fault = "upstream", reason = %reason, "Malformed upstream response");
            }
            RelayError::UnexpectedFailure(reason) => {
                tracing::error!(fault = "unexpected", reason = %reason, "Relay request failed");
            }
        }
    }
}

impl From<ProviderError> for RelayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UpstreamStatus { status } => RelayError::UpstreamFailure { status },
            other => RelayError::UnexpectedFailure(other.to_string()),
        }
    }
}

impl From<RelayError> for OutgoingResponse {
    fn from(err: RelayError) -> Self {
        err.log();
        OutgoingResponse::error(err.status(), err.to_string())
    }
}
