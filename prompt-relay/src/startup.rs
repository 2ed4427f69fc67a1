//! Application startup and lifecycle management.

use crate::config::RelayConfig;
use crate::handlers::{
    health::{health_check, readiness_check},
    metrics::metrics,
    relay::ask_gemini,
};
use crate::relay::PromptRelay;
use crate::services::metrics::init_metrics;
use crate::services::providers::gemini::GeminiProvider;
use crate::services::{ApiKeySource, EnvKeySource};
use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: PromptRelay,
    pub metrics: Option<PrometheusHandle>,
}

/// Render a handler panic as a plain 500 so nothing escapes the boundary.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(fault = "panic", detail = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Vercel-style and Netlify-style paths of the same function.
        .route("/api/ask-gemini", any(ask_gemini))
        .route("/.netlify/functions/ask-gemini", any(ask_gemini))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri().path(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider = GeminiProvider::new(config.gemini.provider_config())
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %provider.model(),
            api_version = %config.gemini.api_version,
            timeout_secs = config.gemini.timeout_secs,
            "Initialized Gemini provider"
        );

        let key_source = Arc::new(EnvKeySource::new(config.gemini.api_key_var.clone()));
        if key_source.api_key().is_none() {
            tracing::warn!(
                fault = "configuration",
                var = %key_source.var(),
                "API key variable is unset; relay requests will fail until it is provided"
            );
        }

        let relay = PromptRelay::new(key_source, Arc::new(provider));

        let state = AppState {
            relay,
            metrics: init_metrics(),
        };

        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Starting prompt-relay on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
