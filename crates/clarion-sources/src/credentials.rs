//! Provider credentials loaded from the environment
//!
//! One credential per external provider. The reasoning provider's key is
//! unconditionally required; the fact-check and news keys are optional,
//! and their adapters degrade to valid empty results when unset.

use std::env;
use thiserror::Error;

/// Credential loading error
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// A required environment variable is unset or blank
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

/// API keys for the three external providers.
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    /// Gemini API key (required)
    pub gemini_api_key: String,

    /// Gemini model override, when set
    pub gemini_model: Option<String>,

    /// NewsData.io API key; article search degrades to empty without it
    pub newsdata_api_key: Option<String>,

    /// Google Fact Check Tools API key; lookups degrade to no-match
    /// without it
    pub fact_check_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Load credentials from environment variables.
    ///
    /// Fails fast, naming the variable, only when `GEMINI_API_KEY` is
    /// missing - the engine cannot produce analysis without it. The other
    /// keys are optional by design.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let gemini_api_key =
            non_blank_env("GEMINI_API_KEY").ok_or(CredentialsError::Missing("GEMINI_API_KEY"))?;

        Ok(Self {
            gemini_api_key,
            gemini_model: non_blank_env("GEMINI_MODEL"),
            newsdata_api_key: non_blank_env("NEWSDATA_API_KEY"),
            fact_check_api_key: non_blank_env("GOOGLE_FACT_CHECK_KEY"),
        })
    }
}

/// Read an environment variable, treating blank values as unset.
fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
