//! NewsData.io adapter
//!
//! Keyword search and top-headlines against the NewsData.io latest-news
//! endpoint. Zero results is a valid empty answer; only transport and
//! status failures become errors.

use crate::{status_error, transport_error, DEFAULT_TIMEOUT_SECS};
use async_trait::async_trait;
use clarion_domain::traits::NewsSource;
use clarion_domain::{Article, SourceError};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const NEWSDATA_API_URL: &str = "https://newsdata.io/api/1";

/// Client for the NewsData.io article search service.
pub struct NewsDataClient {
    api_key: Option<String>,
    http: reqwest::Client,
    base_url: String,
}

/// Response from /latest
#[derive(Deserialize)]
struct LatestResponse {
    status: String,
    #[serde(default)]
    results: Vec<ProviderArticle>,
}

#[derive(Deserialize)]
struct ProviderArticle {
    title: Option<String>,
    description: Option<String>,
    source_name: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

impl NewsDataClient {
    /// Create a new client.
    ///
    /// The key is optional: without one, searches short-circuit to an
    /// empty result set so the rest of the pipeline still runs.
    pub fn new(api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            api_key,
            http,
            base_url: NEWSDATA_API_URL.to_string(),
        }
    }

    /// Override the API base URL (for tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch_latest(
        &self,
        api_key: &str,
        params: &[(&str, &str)],
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        let url = format!("{}/latest", self.base_url);
        let size = limit.to_string();

        let mut query: Vec<(&str, &str)> = vec![("apikey", api_key), ("language", "en")];
        query.extend_from_slice(params);
        query.push(("size", size.as_str()));

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: LatestResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        if body.status != "success" {
            return Err(SourceError::InvalidResponse(format!(
                "provider status {}",
                body.status
            )));
        }

        Ok(body
            .results
            .into_iter()
            .take(limit)
            .map(into_article)
            .collect())
    }
}

#[async_trait]
impl NewsSource for NewsDataClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Article>, SourceError> {
        let Some(api_key) = &self.api_key else {
            debug!("no news credential configured, skipping search");
            return Ok(Vec::new());
        };

        debug!(query_len = query.len(), limit, "news search");
        self.fetch_latest(api_key, &[("q", query)], limit).await
    }

    async fn top_headlines(
        &self,
        country: &str,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        let Some(api_key) = &self.api_key else {
            debug!("no news credential configured, skipping headlines");
            return Ok(Vec::new());
        };

        debug!(country, limit, "top headlines");
        self.fetch_latest(api_key, &[("country", country), ("category", "top")], limit)
            .await
    }
}

fn into_article(raw: ProviderArticle) -> Article {
    Article {
        title: raw.title.unwrap_or_default(),
        source: raw.source_name.unwrap_or_else(|| "Unknown".to_string()),
        description: raw.description,
        url: raw.link,
        published_at: raw.pub_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client = NewsDataClient::new(None);
        assert!(client.search("anything", 5).await.unwrap().is_empty());
        assert!(client.top_headlines("us", 5).await.unwrap().is_empty());
    }

    #[test]
    fn test_parse_latest_response() {
        let json = r#"{
            "status": "success",
            "totalResults": 2,
            "results": [
                {
                    "title": "Aid convoys moving after delays",
                    "link": "https://example.com/aid",
                    "description": "Convoys resumed on Friday.",
                    "pubDate": "2025-07-01 10:00:00",
                    "source_name": "Reuters"
                },
                {
                    "title": "Weather slows relief effort",
                    "link": null,
                    "description": null,
                    "pubDate": null,
                    "source_name": null
                }
            ]
        }"#;

        let parsed: LatestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "success");

        let articles: Vec<Article> = parsed.results.into_iter().map(into_article).collect();
        assert_eq!(articles[0].title, "Aid convoys moving after delays");
        assert_eq!(articles[0].source, "Reuters");
        assert_eq!(articles[0].published_at.as_deref(), Some("2025-07-01 10:00:00"));
        assert_eq!(articles[1].source, "Unknown");
        assert!(articles[1].url.is_none());
    }

    #[test]
    fn test_parse_zero_results() {
        let parsed: LatestResponse =
            serde_json::from_str(r#"{"status": "success", "results": []}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
