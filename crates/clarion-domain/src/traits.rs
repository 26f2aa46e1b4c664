//! Trait definitions for external providers
//!
//! These traits are the seams between the orchestration engine and the
//! outside world. HTTP implementations live in `clarion-sources`; tests
//! inject mocks.

use crate::article::Article;
use crate::source::SourceError;
use crate::verdict::FactCheckReview;
use async_trait::async_trait;

/// The structured fact-check database.
#[async_trait]
pub trait FactCheckSource: Send + Sync {
    /// Look up an existing fact-check record for a claim.
    ///
    /// `Ok(None)` means no record matched - absence is a valid answer,
    /// not a failure.
    async fn lookup(&self, claim: &str) -> Result<Option<FactCheckReview>, SourceError>;
}

/// The news-article search service.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search for articles relevant to a claim, most relevant first,
    /// bounded to `limit` results. Zero results is a valid empty answer.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Article>, SourceError>;

    /// Fetch the current top headlines for a country, bounded to `limit`.
    async fn top_headlines(&self, country: &str, limit: usize)
        -> Result<Vec<Article>, SourceError>;
}

/// The generative reasoning service.
#[async_trait]
pub trait AnalysisSource: Send + Sync {
    /// Produce a free-text factuality analysis of the claim, grounded on
    /// the given articles (which may be empty).
    async fn analyze(&self, claim: &str, evidence: &[Article]) -> Result<String, SourceError>;
}
