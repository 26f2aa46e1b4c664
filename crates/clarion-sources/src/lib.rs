//! Clarion Source Adapters
//!
//! Thin typed clients for the three external providers the engine
//! aggregates:
//!
//! - `FactCheckToolsClient`: the Google Fact Check Tools claim database
//! - `NewsDataClient`: the NewsData.io article search service
//! - `GeminiClient`: the Gemini generative reasoning service
//!
//! Each adapter normalizes its provider's response into the shapes defined
//! in `clarion-domain` and translates every provider failure into a
//! `SourceError` - callers never see a provider-specific error. The `mock`
//! module provides deterministic in-memory adapters with call counting for
//! tests.

#![warn(missing_docs)]

pub mod credentials;
pub mod factcheck;
pub mod gemini;
pub mod mock;
pub mod news;
pub mod prompt;

pub use credentials::{CredentialsError, ProviderCredentials};
pub use factcheck::FactCheckToolsClient;
pub use gemini::GeminiClient;
pub use news::NewsDataClient;

use clarion_domain::SourceError;

/// Seconds an adapter waits for a provider before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Translate a transport-level reqwest failure into a `SourceError`.
pub(crate) fn transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Network(e.to_string())
    }
}

/// Translate a non-success HTTP response into a `SourceError`.
///
/// 429 and 401/403 get their own variants because the composer degrades
/// them with distinct user-facing notices; everything else keeps its
/// status so the retry layer can classify 5xx as transient.
pub(crate) async fn status_error(response: reqwest::Response) -> SourceError {
    let status = response.status();
    let message = response.text().await.unwrap_or_else(|_| String::new());

    match status.as_u16() {
        429 => SourceError::RateLimited,
        401 | 403 => SourceError::Auth(message),
        code => SourceError::Http { status: code, message },
    }
}
