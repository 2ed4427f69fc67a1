use crate::models::{IncomingRequest, OutgoingResponse};
use crate::relay::RelayError;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
};

/// Adapter for the `ask-gemini` routes. Accepts every method so the relay
/// can answer 405 itself with its JSON body.
pub async fn ask_gemini(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> OutgoingResponse {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return unreadable_body(&method, &rejection),
    };

    let request = IncomingRequest::new(method, body);
    state.relay.handle(&request).await
}

/// A body that could not be buffered (over the size limit, aborted stream)
/// reads as an unparsable body, after the method check.
fn unreadable_body(method: &Method, rejection: &BytesRejection) -> OutgoingResponse {
    if *method != Method::POST {
        return RelayError::MethodNotAllowed.into();
    }

    tracing::debug!(
        rejection_status = rejection.status().as_u16(),
        "Failed to read request body"
    );
    RelayError::InvalidRequest(rejection.body_text()).into()
}
