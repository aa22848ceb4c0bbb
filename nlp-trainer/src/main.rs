use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use nlp_trainer_api::{observability, AppState};
use nlp_trainer_llm::{ChatBridge, GeminiClient, GeminiConfig};
use nlp_trainer_toolkit::{Dispatcher, Toolkit};

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::load()?;

    observability::init_logging(config.log_format, config.log_filter())
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Starting NLP trainer server");

    if config.uses_default_secret() && !config.debug {
        tracing::warn!("SESSION_SECRET is not set; running outside debug mode with the development secret key");
    }

    observability::init_metrics()?;

    let toolkit = tokio::task::spawn_blocking(Toolkit::load).await?;
    let dispatcher = Dispatcher::new(Arc::new(toolkit), config.default_backend);

    let gemini = GeminiClient::new(
        GeminiConfig::new(config.llm_api_key.clone())
            .with_model(config.llm_model.clone())
            .with_base_url(config.llm_base_url.clone())
            .with_timeout(Duration::from_secs(config.llm_timeout_secs)),
    )?;
    let chat = ChatBridge::new(Arc::new(gemini));

    let state = AppState::new(dispatcher, chat, config.max_text_length);
    let app = nlp_trainer_api::app(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
