use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "prompt-relay",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness probe: ready once an API key is available.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.relay.is_key_configured() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
