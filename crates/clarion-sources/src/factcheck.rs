//! Google Fact Check Tools adapter
//!
//! Queries the claims:search endpoint for an existing fact-check record
//! and maps the publisher's free-text rating onto the canonical verdict
//! vocabulary. A claim with no record is `Ok(None)`, never an error.

use crate::{status_error, transport_error, DEFAULT_TIMEOUT_SECS};
use async_trait::async_trait;
use clarion_domain::traits::FactCheckSource;
use clarion_domain::{FactCheckReview, SourceError, VerdictLabel};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const FACT_CHECK_API_URL: &str = "https://factchecktools.googleapis.com/v1alpha1";

/// Client for the Google Fact Check Tools claim database.
pub struct FactCheckToolsClient {
    api_key: Option<String>,
    http: reqwest::Client,
    base_url: String,
}

/// Response from claims:search
#[derive(Deserialize)]
struct ClaimsSearchResponse {
    #[serde(default)]
    claims: Vec<ProviderClaim>,
}

#[derive(Deserialize)]
struct ProviderClaim {
    text: Option<String>,
    #[serde(rename = "claimReview", default)]
    claim_review: Vec<ProviderReview>,
}

#[derive(Deserialize)]
struct ProviderReview {
    #[serde(rename = "textualRating")]
    textual_rating: Option<String>,
    publisher: Option<ProviderPublisher>,
}

#[derive(Deserialize)]
struct ProviderPublisher {
    name: Option<String>,
}

impl FactCheckToolsClient {
    /// Create a new client.
    ///
    /// The key is optional: without one, lookups short-circuit to
    /// `Ok(None)` so the rest of the pipeline still runs.
    pub fn new(api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            api_key,
            http,
            base_url: FACT_CHECK_API_URL.to_string(),
        }
    }

    /// Override the API base URL (for tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl FactCheckSource for FactCheckToolsClient {
    async fn lookup(&self, claim: &str) -> Result<Option<FactCheckReview>, SourceError> {
        let Some(api_key) = &self.api_key else {
            debug!("no fact-check credential configured, skipping lookup");
            return Ok(None);
        };

        let url = format!("{}/claims:search", self.base_url);

        debug!(claim_len = claim.len(), "fact-check lookup");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", claim),
                ("languageCode", "en"),
                ("pageSize", "1"),
                ("key", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: ClaimsSearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        Ok(body.claims.into_iter().next().map(into_review))
    }
}

fn into_review(claim: ProviderClaim) -> FactCheckReview {
    let review = claim.claim_review.into_iter().next();

    let (rating, publisher) = match review {
        Some(r) => (
            r.textual_rating.unwrap_or_default(),
            r.publisher.and_then(|p| p.name),
        ),
        None => (String::new(), None),
    };

    FactCheckReview {
        verdict: VerdictLabel::from_provider_rating(&rating),
        source: publisher.unwrap_or_else(|| "Unknown".to_string()),
        summary: claim
            .text
            .unwrap_or_else(|| "No summary available".to_string()),
    }
}
