//! Time-expiring verdict cache keyed by claim fingerprint

use clarion_domain::{Fingerprint, Verdict};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory, TTL-expiring store of composed verdicts.
///
/// Entries expire lazily: staleness is checked at read time and stale
/// entries are dropped on access, so no background sweep is needed.
/// Writes are insert-on-miss with last-writer-wins; two callers racing on
/// the same fingerprint at most duplicate upstream work, they never
/// produce an inconsistent entry. The cache is process-scoped and does not
/// survive restarts.
pub struct VerdictCache {
    ttl: Duration,
    entries: Mutex<HashMap<Fingerprint, CacheEntry>>,
}

struct CacheEntry {
    verdict: Verdict,
    stored_at: Instant,
}

impl VerdictCache {
    /// Create a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a verdict, dropping it if it has expired.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<Verdict> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(fingerprint) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.verdict.clone()),
            Some(_) => {
                entries.remove(fingerprint);
                None
            }
            None => None,
        }
    }

    /// Store a verdict. An existing entry for the fingerprint is replaced.
    pub fn put(&self, fingerprint: Fingerprint, verdict: Verdict) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            fingerprint,
            CacheEntry {
                verdict,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of entries currently held, including not-yet-collected
    /// stale ones.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
