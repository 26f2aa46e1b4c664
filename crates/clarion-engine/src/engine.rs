//! Orchestration engine facade

use crate::cache::VerdictCache;
use crate::composer::{compose, SourceOutcomes};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::retry::RetryPolicy;
use clarion_domain::traits::{AnalysisSource, FactCheckSource, NewsSource};
use clarion_domain::{Article, Fingerprint, TrendingItem, Verdict};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sentinel summary for trending items with no fact-check record.
const NO_FACT_CHECK_SUMMARY: &str = "No fact-check available";

/// Sentinel attribution for trending items with no fact-check record.
const NO_FACT_CHECK_SOURCE: &str = "N/A";

/// The fact-check orchestration engine.
///
/// Sequences cache lookup, retried source queries, verdict composition,
/// and cache store for each claim. Generic over the three adapter seams so
/// tests inject mocks and production injects the HTTP clients.
///
/// Each call is independent; the verdict cache is the only shared state
/// across calls. No call blocks indefinitely: every source query is
/// bounded by the adapter's request timeout times the retry budget.
pub struct Engine<F, N, A> {
    fact_check_source: Arc<F>,
    news_source: Arc<N>,
    analysis_source: Arc<A>,
    cache: VerdictCache,
    retry: RetryPolicy,
    config: EngineConfig,
}

impl<F, N, A> Engine<F, N, A>
where
    F: FactCheckSource,
    N: NewsSource,
    A: AnalysisSource,
{
    /// Create an engine over the given adapters.
    pub fn new(fact_check_source: F, news_source: N, analysis_source: A, config: EngineConfig) -> Self {
        Self {
            cache: VerdictCache::new(config.cache_ttl()),
            retry: RetryPolicy::new(config.max_attempts, config.retry_base_delay()),
            fact_check_source: Arc::new(fact_check_source),
            news_source: Arc::new(news_source),
            analysis_source: Arc::new(analysis_source),
            config,
        }
    }

    /// Fact-check a single claim.
    ///
    /// Rejects only blank input; every provider-side failure is absorbed
    /// into the verdict by the degradation policy. A cache hit within the
    /// TTL returns the stored verdict without touching any provider.
    pub async fn fact_check(&self, claim: &str) -> Result<Verdict, EngineError> {
        let claim = claim.trim();
        if claim.is_empty() {
            return Err(EngineError::EmptyClaim);
        }

        let fingerprint = Fingerprint::of(claim);
        if let Some(verdict) = self.cache.get(&fingerprint) {
            debug!(%fingerprint, "cache hit");
            return Ok(verdict);
        }

        info!(%fingerprint, claim_len = claim.len(), "fact-checking claim");

        // The database lookup and the article search are independent; the
        // reasoning call follows so the articles can ground it.
        let (fact_check, articles) = tokio::join!(
            self.retry
                .run("fact-check", || self.fact_check_source.lookup(claim)),
            self.retry
                .run("news", || self.news_source.search(claim, self.config.news_limit)),
        );

        let grounding: &[Article] = match &articles {
            Ok(articles) => articles.as_slice(),
            Err(_) => &[],
        };

        let analysis = self
            .retry
            .run("analysis", || self.analysis_source.analyze(claim, grounding))
            .await;

        let verdict = compose(
            claim,
            SourceOutcomes {
                fact_check,
                articles,
                analysis,
            },
        );

        self.cache.put(fingerprint, verdict.clone());

        Ok(verdict)
    }

    /// Fetch the trending feed: the current top headlines, each run
    /// through the single-claim pipeline and projected for list display
    /// with stable 1-based ranks.
    ///
    /// A headline outage degrades to an empty feed rather than an error.
    pub async fn trending(&self) -> Result<Vec<TrendingItem>, EngineError> {
        let headlines = match self
            .retry
            .run("news", || {
                self.news_source
                    .top_headlines(&self.config.country, self.config.trending_limit)
            })
            .await
        {
            Ok(headlines) => headlines,
            Err(error) => {
                warn!(error = %error, "trending headlines unavailable");
                return Ok(Vec::new());
            }
        };

        let mut items = Vec::with_capacity(headlines.len());
        for headline in headlines
            .into_iter()
            .filter(|headline| !headline.title.trim().is_empty())
        {
            let verdict = self.fact_check(&headline.title).await?;

            let (summary, fact_check_source) = match &verdict.fact_check {
                Some(review) => (review.summary.clone(), review.source.clone()),
                None => (
                    NO_FACT_CHECK_SUMMARY.to_string(),
                    NO_FACT_CHECK_SOURCE.to_string(),
                ),
            };

            items.push(TrendingItem {
                id: items.len() + 1,
                title: headline.title,
                source: headline.source,
                url: headline.url,
                published_date: headline.published_at,
                verdict: verdict.verdict,
                summary,
                fact_check_source,
            });
        }

        Ok(items)
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
