//! Claim normalization and fingerprinting

use std::fmt;

/// Normalize a raw claim for fingerprinting and deduplication.
///
/// Normalization is trim + lowercase. Two claims that normalize identically
/// are the same claim as far as caching is concerned; inner whitespace is
/// preserved, so word spacing still distinguishes claims.
pub fn normalize(claim: &str) -> String {
    claim.trim().to_lowercase()
}

/// Content-addressed identifier for a claim.
///
/// A Fingerprint is a name-based (v5) UUID over the normalized claim text,
/// giving a fixed-length, deterministic key: the same claim always hashes
/// to the same fingerprint, on any process, with no coordination.
///
/// # Examples
///
/// ```
/// use clarion_domain::Fingerprint;
///
/// let a = Fingerprint::of("Coffee Is Good  ");
/// let b = Fingerprint::of("coffee is good");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u128);

impl Fingerprint {
    /// Fingerprint a claim, normalizing it first.
    pub fn of(claim: &str) -> Self {
        let normalized = normalize(claim);
        Self(uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, normalized.as_bytes()).as_u128())
    }

    /// Create a Fingerprint from a raw u128 value.
    ///
    /// This is primarily for tests and debugging tooling.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value.
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}
