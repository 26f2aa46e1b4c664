//! Clarion Domain Layer
//!
//! Core types and trait interfaces for the Clarion fact-check engine.
//! This crate defines what a claim, a verdict, and a piece of evidence are,
//! and the seams through which external providers are queried. Provider
//! implementations live in `clarion-sources`; orchestration lives in
//! `clarion-engine`.
//!
//! ## Key Concepts
//!
//! - **Claim**: the text statement being evaluated for factual accuracy
//! - **Fingerprint**: a normalized, hashed identifier for a claim, used as
//!   a cache key and for deduplication
//! - **Verdict**: the composed result of fact-checking a claim - label,
//!   analysis, and supporting evidence
//! - **SourceError**: the typed failure vocabulary every provider adapter
//!   must translate its own errors into

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod claim;
pub mod source;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use article::Article;
pub use claim::{normalize, Fingerprint};
pub use source::SourceError;
pub use verdict::{FactCheckReview, TrendingItem, Verdict, VerdictLabel};
