//! Error types for the orchestration engine

use thiserror::Error;

/// Errors the engine reports to its caller.
///
/// Provider-side failures never appear here: retries and degradation
/// absorb them into the verdict itself. The only rejection that crosses
/// the engine boundary is caller-input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The submitted claim was empty or whitespace-only
    #[error("claim must not be empty")]
    EmptyClaim,
}
