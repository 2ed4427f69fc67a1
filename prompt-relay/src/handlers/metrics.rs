use crate::startup::AppState;
use axum::extract::State;
use service_core::error::AppError;

pub async fn metrics(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(AppError::ServiceUnavailable)
}
