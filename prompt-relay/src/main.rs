use dotenvy::dotenv;
use prompt_relay::config::RelayConfig;
use prompt_relay::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing(
        "prompt-relay",
        &config.common.log_level,
        otlp_endpoint.as_deref(),
    )?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
