//! Typed failure vocabulary for provider adapters

use thiserror::Error;

/// Errors a source adapter can report.
///
/// Adapters translate every provider-specific failure into one of these
/// variants; nothing provider-shaped crosses the adapter boundary. An
/// unavailable source is simply the `Err` arm of an adapter call carrying
/// one of these reasons - the composer absorbs it into the verdict
/// instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The provider signaled throttling (HTTP 429 or equivalent)
    #[error("provider rate limit exceeded")]
    RateLimited,

    /// The provider rejected the configured credential
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The request exceeded its deadline
    #[error("request timed out")]
    Timeout,

    /// The provider answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The request never completed (DNS, connect, TLS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a body the adapter could not interpret
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SourceError {
    /// Whether retrying the same call could plausibly succeed.
    ///
    /// Throttling, timeouts, network faults, and 5xx responses are
    /// transient. Credential rejections and malformed responses are not -
    /// repeating those calls only burns the retry budget.
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::RateLimited | SourceError::Timeout | SourceError::Network(_) => true,
            SourceError::Http { status, .. } => *status >= 500,
            SourceError::Auth(_) | SourceError::InvalidResponse(_) => false,
        }
    }
}
