//! End-to-end engine tests over mock adapters

use clarion_domain::{FactCheckReview, SourceError, VerdictLabel};
use clarion_engine::composer::{AUTH_NOTICE, RATE_LIMIT_NOTICE};
use clarion_engine::{Engine, EngineConfig, EngineError};
use clarion_sources::mock::{test_article, MockAnalysis, MockFactCheck, MockNews};

/// Test config: no backoff delay so retry paths run instantly.
fn test_config() -> EngineConfig {
    EngineConfig {
        retry_base_secs: 0,
        ..EngineConfig::default()
    }
}

fn politifact_false() -> FactCheckReview {
    FactCheckReview {
        verdict: VerdictLabel::False,
        source: "PolitiFact".to_string(),
        summary: "The claim has been debunked repeatedly.".to_string(),
    }
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let fact_check = MockFactCheck::hit(politifact_false());
    let news = MockNews::with_articles(vec![
        test_article("Study finds no link", "Reuters", Some("https://example.com/1")),
        test_article("Health agency reiterates safety", "AP", Some("https://example.com/2")),
        test_article("Doctors respond to viral claim", "BBC", Some("https://example.com/3")),
    ]);
    let analysis = MockAnalysis::new("The claim is contradicted by all cited evidence.");

    let engine = Engine::new(fact_check, news, analysis, test_config());
    let verdict = engine.fact_check("Vaccines cause autism").await.unwrap();

    assert_eq!(verdict.verdict, VerdictLabel::False);
    assert_eq!(verdict.fact_check.as_ref().unwrap().source, "PolitiFact");
    assert_eq!(verdict.articles_count, 3);
    assert_eq!(
        verdict.analysis,
        "The claim is contradicted by all cited evidence."
    );
    assert_eq!(verdict.claim, "Vaccines cause autism");
}

#[tokio::test]
async fn test_idempotence_within_ttl() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::with_articles(vec![test_article("a", "s", None)]);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check.clone(), news.clone(), analysis.clone(), test_config());

    let first = engine.fact_check("coffee is good").await.unwrap();
    let second = engine.fact_check("coffee is good").await.unwrap();

    // Byte-identical payloads
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );

    // The second call consulted no adapter
    assert_eq!(fact_check.calls(), 1);
    assert_eq!(news.calls(), 1);
    assert_eq!(analysis.calls(), 1);
}

#[tokio::test]
async fn test_fingerprint_equivalence_hits_same_entry() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::empty();
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check.clone(), news, analysis.clone(), test_config());

    engine.fact_check("Coffee Is Good  ").await.unwrap();
    engine.fact_check("coffee is good").await.unwrap();

    assert_eq!(fact_check.calls(), 1);
    assert_eq!(analysis.calls(), 1);
}

#[tokio::test]
async fn test_blank_claims_rejected_without_adapter_calls() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::empty();
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check.clone(), news.clone(), analysis.clone(), test_config());

    assert_eq!(engine.fact_check("").await, Err(EngineError::EmptyClaim));
    assert_eq!(engine.fact_check("   ").await, Err(EngineError::EmptyClaim));

    assert_eq!(fact_check.calls(), 0);
    assert_eq!(news.calls(), 0);
    assert_eq!(analysis.calls(), 0);
}

#[tokio::test]
async fn test_ai_rate_limit_degrades_but_keeps_articles() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::with_articles(vec![
        test_article("a", "Reuters", Some("https://example.com/a")),
        test_article("b", "AP", Some("https://example.com/b")),
    ]);
    let analysis = MockAnalysis::new("unused").failing_with(SourceError::RateLimited);

    let engine = Engine::new(fact_check, news, analysis, test_config());
    let verdict = engine.fact_check("some viral claim").await.unwrap();

    assert_eq!(verdict.analysis, RATE_LIMIT_NOTICE);
    assert_eq!(verdict.articles_count, 2);
    assert!(!verdict.supporting_articles.is_empty());
}

#[tokio::test]
async fn test_ai_auth_failure_gets_distinct_notice_without_retries() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::empty();
    let analysis =
        MockAnalysis::new("unused").failing_with(SourceError::Auth("denied".to_string()));

    let engine = Engine::new(fact_check, news, analysis.clone(), test_config());
    let verdict = engine.fact_check("some claim").await.unwrap();

    assert_eq!(verdict.analysis, AUTH_NOTICE);
    // Auth errors are never retried
    assert_eq!(analysis.calls(), 1);
}

#[tokio::test]
async fn test_transient_failures_recovered_within_budget() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::with_articles(vec![test_article("a", "s", None)]).fail_times(2);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news.clone(), analysis, test_config());
    let verdict = engine.fact_check("flaky network claim").await.unwrap();

    // Two failures then success on the third attempt
    assert_eq!(news.calls(), 3);
    assert_eq!(verdict.articles_count, 1);
    assert_eq!(verdict.analysis, "analysis");
}

#[tokio::test]
async fn test_exhausted_source_degrades() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::with_articles(vec![test_article("a", "s", None)]).fail_times(5);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news.clone(), analysis, test_config());
    let verdict = engine.fact_check("unreachable news claim").await.unwrap();

    // Budget is three attempts, all consumed
    assert_eq!(news.calls(), 3);
    assert!(verdict.supporting_articles.is_empty());
    // The reasoning call still ran, ungrounded
    assert_eq!(verdict.analysis, "analysis");
}

#[tokio::test]
async fn test_duplicate_articles_collapsed() {
    let fact_check = MockFactCheck::no_match();
    let mut duplicate = test_article("Same story", "Reuters", Some("https://example.com/s"));
    duplicate.description = Some("first wording".to_string());
    let mut duplicate_again = duplicate.clone();
    duplicate_again.description = Some("second wording".to_string());

    let news = MockNews::with_articles(vec![duplicate, duplicate_again]);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news, analysis, test_config());
    let verdict = engine.fact_check("duplicated story claim").await.unwrap();

    assert_eq!(verdict.articles_count, 1);
}

#[tokio::test]
async fn test_trending_ranks_and_attribution() {
    let fact_check = MockFactCheck::hit(politifact_false());
    let news = MockNews::empty().with_headlines(vec![
        test_article("New bank rule drains accounts", "Daily Wire", Some("https://example.com/1")),
        test_article("Tax cut passed on Friday", "Reuters", Some("https://example.com/2")),
    ]);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news, analysis, test_config());
    let items = engine.trending().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[1].id, 2);
    assert_eq!(items[0].title, "New bank rule drains accounts");
    assert_eq!(items[0].verdict, VerdictLabel::False);
    assert_eq!(items[0].fact_check_source, "PolitiFact");
}

#[tokio::test]
async fn test_trending_without_record_uses_sentinels() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::empty()
        .with_headlines(vec![test_article("Quiet local story", "Gazette", None)]);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news, analysis, test_config());
    let items = engine.trending().await.unwrap();

    assert_eq!(items[0].verdict, VerdictLabel::Analyzed);
    assert_eq!(items[0].summary, "No fact-check available");
    assert_eq!(items[0].fact_check_source, "N/A");
}

#[tokio::test]
async fn test_trending_degrades_to_empty_on_news_outage() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::empty().failing_with(SourceError::Http {
        status: 503,
        message: String::new(),
    });
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news, analysis, test_config());
    let items = engine.trending().await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_trending_headlines_share_claim_cache() {
    let fact_check = MockFactCheck::no_match();
    let news = MockNews::empty()
        .with_headlines(vec![test_article("Same headline", "Reuters", None)]);
    let analysis = MockAnalysis::new("analysis");

    let engine = Engine::new(fact_check, news, analysis.clone(), test_config());

    engine.fact_check("Same headline").await.unwrap();
    let items = engine.trending().await.unwrap();

    // The headline's pipeline run was served from the cache
    assert_eq!(analysis.calls(), 1);
    assert_eq!(items.len(), 1);
}
