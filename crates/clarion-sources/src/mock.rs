//! Deterministic mock adapters for testing
//!
//! These adapters return pre-configured results without any network calls
//! and count invocations, so tests can assert both pipeline output and
//! which sources were actually consulted.
//!
//! Each mock can be scripted to fail: `failing_with` makes every call
//! return the given error, and `fail_times` makes the first N calls return
//! a transient timeout before the configured success - the shape retry
//! tests need.

use async_trait::async_trait;
use clarion_domain::traits::{AnalysisSource, FactCheckSource, NewsSource};
use clarion_domain::{Article, FactCheckReview, SourceError};
use std::sync::{Arc, Mutex};

/// Shared failure/counting state for a mock adapter.
#[derive(Debug, Default)]
struct MockState {
    calls: usize,
    transient_failures_remaining: u32,
    error: Option<SourceError>,
}

impl MockState {
    /// Record a call; returns the scripted error if one applies.
    fn on_call(&mut self) -> Result<(), SourceError> {
        self.calls += 1;
        if self.transient_failures_remaining > 0 {
            self.transient_failures_remaining -= 1;
            return Err(SourceError::Timeout);
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        Ok(())
    }
}

/// Mock fact-check database.
#[derive(Debug, Clone, Default)]
pub struct MockFactCheck {
    review: Option<FactCheckReview>,
    state: Arc<Mutex<MockState>>,
}

impl MockFactCheck {
    /// A database with no matching record for any claim.
    pub fn no_match() -> Self {
        Self::default()
    }

    /// A database that returns the given record for every claim.
    pub fn hit(review: FactCheckReview) -> Self {
        Self {
            review: Some(review),
            ..Self::default()
        }
    }

    /// Make every call fail with the given error.
    pub fn failing_with(self, error: SourceError) -> Self {
        self.state.lock().unwrap().error = Some(error);
        self
    }

    /// Make the first `n` calls fail with a transient timeout.
    pub fn fail_times(self, n: u32) -> Self {
        self.state.lock().unwrap().transient_failures_remaining = n;
        self
    }

    /// Number of times this adapter was invoked.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

#[async_trait]
impl FactCheckSource for MockFactCheck {
    async fn lookup(&self, _claim: &str) -> Result<Option<FactCheckReview>, SourceError> {
        self.state.lock().unwrap().on_call()?;
        Ok(self.review.clone())
    }
}

/// Mock news-search service.
#[derive(Debug, Clone, Default)]
pub struct MockNews {
    articles: Vec<Article>,
    headlines: Vec<Article>,
    state: Arc<Mutex<MockState>>,
}

impl MockNews {
    /// A service with no articles at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A service returning the given articles for every search.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    /// Set the headlines returned by `top_headlines`.
    pub fn with_headlines(mut self, headlines: Vec<Article>) -> Self {
        self.headlines = headlines;
        self
    }

    /// Make every call fail with the given error.
    pub fn failing_with(self, error: SourceError) -> Self {
        self.state.lock().unwrap().error = Some(error);
        self
    }

    /// Make the first `n` calls fail with a transient timeout.
    pub fn fail_times(self, n: u32) -> Self {
        self.state.lock().unwrap().transient_failures_remaining = n;
        self
    }

    /// Number of times this adapter was invoked.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

#[async_trait]
impl NewsSource for MockNews {
    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<Article>, SourceError> {
        self.state.lock().unwrap().on_call()?;
        Ok(self.articles.iter().take(limit).cloned().collect())
    }

    async fn top_headlines(
        &self,
        _country: &str,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        self.state.lock().unwrap().on_call()?;
        Ok(self.headlines.iter().take(limit).cloned().collect())
    }
}

/// Mock reasoning service.
#[derive(Debug, Clone, Default)]
pub struct MockAnalysis {
    analysis: String,
    state: Arc<Mutex<MockState>>,
}

impl MockAnalysis {
    /// A service returning the given analysis text for every claim.
    pub fn new(analysis: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
            state: Arc::default(),
        }
    }

    /// Make every call fail with the given error.
    pub fn failing_with(self, error: SourceError) -> Self {
        self.state.lock().unwrap().error = Some(error);
        self
    }

    /// Make the first `n` calls fail with a transient timeout.
    pub fn fail_times(self, n: u32) -> Self {
        self.state.lock().unwrap().transient_failures_remaining = n;
        self
    }

    /// Number of times this adapter was invoked.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

#[async_trait]
impl AnalysisSource for MockAnalysis {
    async fn analyze(&self, _claim: &str, _evidence: &[Article]) -> Result<String, SourceError> {
        self.state.lock().unwrap().on_call()?;
        Ok(self.analysis.clone())
    }
}

/// Convenience constructor for test articles.
pub fn test_article(title: &str, source: &str, url: Option<&str>) -> Article {
    Article {
        title: title.to_string(),
        source: source.to_string(),
        description: None,
        url: url.map(String::from),
        published_at: None,
    }
}
