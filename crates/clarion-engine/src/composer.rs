//! Verdict composition
//!
//! Merges the three source outcomes into one verdict, applying the
//! precedence and degradation policy: an authoritative fact-check label
//! wins the top-level verdict, articles are deduplicated in relevance
//! order, and an unavailable source is replaced by a fixed notice instead
//! of failing the request. Absence of all evidence is a valid terminal
//! answer.

use clarion_domain::{Article, FactCheckReview, SourceError, Verdict, VerdictLabel};
use std::collections::HashSet;
use tracing::warn;

/// Notice shown when the reasoning provider is throttling.
pub const RATE_LIMIT_NOTICE: &str = "AI analysis is temporarily unavailable due to rate limits. \
Please try again in a few moments. Any articles found below are still worth reviewing.";

/// Notice shown when the reasoning provider rejected the credential.
pub const AUTH_NOTICE: &str = "AI analysis is unavailable because the provider rejected the \
configured API key. Please verify the credential. Any articles found below are still worth \
reviewing.";

/// Notice shown when the reasoning provider is unreachable for any other
/// reason.
pub const UNAVAILABLE_NOTICE: &str = "AI analysis is currently unavailable. Any articles found \
below are still worth reviewing.";

/// The three adapter outcomes for one claim, post-retry.
///
/// An `Err` arm is a source that stayed unavailable after its retry
/// budget; the composer absorbs it instead of propagating.
pub struct SourceOutcomes {
    /// Fact-check database outcome; `Ok(None)` is a valid no-match
    pub fact_check: Result<Option<FactCheckReview>, SourceError>,
    /// News search outcome; `Ok(vec![])` is a valid empty result
    pub articles: Result<Vec<Article>, SourceError>,
    /// Reasoning provider outcome
    pub analysis: Result<String, SourceError>,
}

/// Compose the final verdict for a claim from its source outcomes.
pub fn compose(claim: &str, outcomes: SourceOutcomes) -> Verdict {
    let fact_check = match outcomes.fact_check {
        Ok(hit) => hit,
        Err(error) => {
            warn!(error = %error, "fact-check database unavailable");
            None
        }
    };

    let articles = match outcomes.articles {
        Ok(articles) => dedup_articles(articles),
        Err(error) => {
            warn!(error = %error, "news search unavailable");
            Vec::new()
        }
    };

    let analysis = match outcomes.analysis {
        Ok(text) => text,
        Err(SourceError::RateLimited) => RATE_LIMIT_NOTICE.to_string(),
        Err(SourceError::Auth(_)) => AUTH_NOTICE.to_string(),
        Err(error) => {
            warn!(error = %error, "reasoning provider unavailable");
            UNAVAILABLE_NOTICE.to_string()
        }
    };

    // An official record with a real rating owns the top-level label; the
    // record itself is embedded either way.
    let verdict = match &fact_check {
        Some(review) if review.verdict.is_authoritative() => review.verdict,
        _ => VerdictLabel::Analyzed,
    };

    Verdict {
        claim: claim.to_string(),
        verdict,
        analysis,
        articles_count: articles.len(),
        supporting_articles: articles,
        fact_check,
    }
}

/// Drop repeated articles, keeping the first (most relevant) occurrence of
/// each (title, source, url) identity.
fn dedup_articles(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| {
            seen.insert((
                article.title.clone(),
                article.source.clone(),
                article.url.clone(),
            ))
        })
        .collect()
}
