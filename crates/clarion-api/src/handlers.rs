//! HTTP request handlers for the API service.
//!
//! Implements the fact-check and trending endpoints using axum. Handlers
//! are generic over the adapter seams so integration tests can drive the
//! real router with mock sources.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clarion_domain::traits::{AnalysisSource, FactCheckSource, NewsSource};
use clarion_domain::{TrendingItem, Verdict};
use clarion_engine::{Engine, EngineError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state
pub struct AppState<F, N, A> {
    /// The orchestration engine
    pub engine: Arc<Engine<F, N, A>>,
}

impl<F, N, A> Clone for AppState<F, N, A> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

/// Fact-check request body
#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    /// The claim to evaluate
    pub claim: String,
}

/// Success envelope wrapping every payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Always "success" - provider failures degrade inside the payload
    pub status: String,
    /// The response payload
    pub data: T,
}

fn success<T>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        status: "success".to_string(),
        data,
    })
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Human-readable banner
    pub message: String,
    /// Overall status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Caller-input validation failure
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::EmptyClaim => AppError::InvalidInput("claim must not be empty".to_string()),
        }
    }
}

/// GET / - health check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Clarion API is running".to_string(),
        status: "healthy".to_string(),
    })
}

/// GET /api/trending - top headlines with fact-check verdicts
async fn get_trending<F, N, A>(
    State(state): State<AppState<F, N, A>>,
) -> Result<Json<Envelope<Vec<TrendingItem>>>, AppError>
where
    F: FactCheckSource + 'static,
    N: NewsSource + 'static,
    A: AnalysisSource + 'static,
{
    let items = state.engine.trending().await?;
    Ok(success(items))
}

/// POST /api/fact-check - evaluate one claim
async fn post_fact_check<F, N, A>(
    State(state): State<AppState<F, N, A>>,
    Json(request): Json<FactCheckRequest>,
) -> Result<Json<Envelope<Verdict>>, AppError>
where
    F: FactCheckSource + 'static,
    N: NewsSource + 'static,
    A: AnalysisSource + 'static,
{
    let verdict = state.engine.fact_check(&request.claim).await?;
    Ok(success(verdict))
}

/// Build the API router over the given state.
pub fn create_router<F, N, A>(state: AppState<F, N, A>) -> Router
where
    F: FactCheckSource + 'static,
    N: NewsSource + 'static,
    A: AnalysisSource + 'static,
{
    Router::new()
        .route("/", get(health))
        .route("/api/trending", get(get_trending::<F, N, A>))
        .route("/api/fact-check", post(post_fact_check::<F, N, A>))
        .with_state(state)
}
