//! Gemini adapter
//!
//! Sends the claim plus article snippets to the generateContent endpoint
//! under a fixed fact-checking system instruction and returns the model's
//! free-text analysis. Throttling (429) and credential rejections (401/403)
//! are surfaced as distinct `SourceError` variants because each degrades
//! with its own user-facing notice.

use crate::prompt::{AnalysisPrompt, SYSTEM_INSTRUCTION};
use crate::{status_error, transport_error, DEFAULT_TIMEOUT_SECS};
use async_trait::async_trait;
use clarion_domain::traits::AnalysisSource;
use clarion_domain::{Article, SourceError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the Gemini generateContent API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    /// Create a new client with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            http,
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Use a specific model (e.g. "gemini-2.5-flash").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (for tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl AnalysisSource for GeminiClient {
    async fn analyze(&self, claim: &str, evidence: &[Article]) -> Result<String, SourceError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let prompt = AnalysisPrompt::new(claim, evidence).build();

        debug!(model = %self.model, prompt_len = prompt.len(), "analysis request");

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(SourceError::InvalidResponse(
                "response contained no analysis text".to_string(),
            ));
        }

        Ok(text)
    }
}
