//! Clarion API
//!
//! Thin HTTP boundary over the fact-check orchestration engine. Routing
//! and configuration loading only - all control flow and failure handling
//! live in `clarion-engine`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use clarion_engine::Engine;
use clarion_sources::{FactCheckToolsClient, GeminiClient, NewsDataClient};
use config::ApiConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// API server error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the API server.
///
/// Builds the provider clients from the loaded credentials, assembles the
/// engine, and serves the axum router until shutdown.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    info!("Starting Clarion API");
    info!("Bind address: {}", config.bind_addr());
    info!(
        "Optional credentials: news={}, fact-check={}",
        config.credentials.newsdata_api_key.is_some(),
        config.credentials.fact_check_api_key.is_some(),
    );

    let fact_check = FactCheckToolsClient::new(config.credentials.fact_check_api_key.clone());
    let news = NewsDataClient::new(config.credentials.newsdata_api_key.clone());
    let mut gemini = GeminiClient::new(config.credentials.gemini_api_key.clone());
    if let Some(model) = &config.credentials.gemini_model {
        gemini = gemini.with_model(model);
    }

    let engine = Engine::new(fact_check, news, gemini, config.engine.clone());

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}
