//! Configuration for the orchestration engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for caching, retries, and source query bounds.
///
/// # Examples
///
/// ```
/// use clarion_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.cache_ttl_secs, 3600);
/// assert_eq!(config.max_attempts, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long a composed verdict stays valid in the cache (seconds)
    /// Default: 3600 (one hour)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Attempts per source call, including the first
    /// Default: 3
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial backoff delay between attempts (seconds); doubles each retry
    /// Default: 2
    #[serde(default = "default_retry_base_secs")]
    pub retry_base_secs: u64,

    /// Articles requested per claim from the news service
    /// Default: 5
    #[serde(default = "default_news_limit")]
    pub news_limit: usize,

    /// Headlines pulled for the trending feed
    /// Default: 5
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,

    /// Country code for the trending feed
    /// Default: "us"
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_base_secs() -> u64 {
    2
}

fn default_news_limit() -> usize {
    5
}

fn default_trending_limit() -> usize {
    5
}

fn default_country() -> String {
    "us".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            max_attempts: default_max_attempts(),
            retry_base_secs: default_retry_base_secs(),
            news_limit: default_news_limit(),
            trending_limit: default_trending_limit(),
            country: default_country(),
        }
    }
}

impl EngineConfig {
    /// Get the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Get the initial retry delay as a Duration.
    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_secs(self.retry_base_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.news_limit == 0 {
            return Err("news_limit must be greater than 0".to_string());
        }
        if self.trending_limit == 0 {
            return Err("trending_limit must be greater than 0".to_string());
        }
        if self.country.is_empty() {
            return Err("country must not be empty".to_string());
        }
        Ok(())
    }
}
