use std::sync::Arc;

use anyhow::Context;

use invtrack_api::{AppConfig, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    invtrack_observability::init();

    let config = AppConfig::from_env();
    if config.forecast.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set; forecasts will use the fallback heuristic");
    }

    let services = app::services::AppServices::from_config(&config)
        .with_context(|| format!("failed to load state from {}", config.data_dir.display()))?;
    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        model_id = %config.forecast.display_model_id,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
