//! Clarion Fact-Check Orchestration Engine
//!
//! The engine accepts a claim, queries the three external sources through
//! a retry/backoff controller, deduplicates and caches results, and
//! composes a final verdict with supporting citations.
//!
//! The central contract is degrade-not-fail: partial source failure never
//! prevents the caller from getting whatever evidence is available. The
//! only rejection the engine ever raises is for a blank claim; every
//! provider-side condition is absorbed into the verdict's content.
//!
//! # Components
//!
//! - [`RetryPolicy`]: bounded exponential backoff around one adapter call
//! - [`VerdictCache`]: TTL-expiring store keyed by claim fingerprint
//! - [`composer`]: merges the three source outcomes into one [`Verdict`]
//! - [`Engine`]: the facade sequencing cache lookup, source queries,
//!   composition, and cache store
//!
//! [`Verdict`]: clarion_domain::Verdict

#![warn(missing_docs)]

pub mod cache;
pub mod composer;
pub mod config;
pub mod engine;
pub mod error;
pub mod retry;

pub use cache::VerdictCache;
pub use composer::{compose, SourceOutcomes};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use retry::RetryPolicy;
