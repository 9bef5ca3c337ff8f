//! Snapshot cache for per-prop market data.
//!
//! Fetched line ladders are cached per prop with an injectable invalidation
//! policy, so the staleness rule lives with the caller instead of inside a
//! module-level singleton.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::trace;

use crate::domain::{LineOdds, PropId};

/// Decides when a cached snapshot is too old to serve.
pub trait InvalidationPolicy: Send + Sync {
    /// Whether an entry of the given age should be discarded.
    fn is_expired(&self, age: Duration) -> bool;
}

/// Expire entries once they reach a fixed TTL.
#[derive(Debug, Clone, Copy)]
pub struct MaxAge {
    ttl: Duration,
}

impl MaxAge {
    /// Create a TTL policy.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl InvalidationPolicy for MaxAge {
    fn is_expired(&self, age: Duration) -> bool {
        age >= self.ttl
    }
}

/// Never expire; entries live until explicitly invalidated.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepForever;

impl InvalidationPolicy for KeepForever {
    fn is_expired(&self, _age: Duration) -> bool {
        false
    }
}

struct Entry {
    lines: Vec<LineOdds>,
    inserted_at: Instant,
}

/// Thread-safe cache of line-ladder snapshots keyed by prop.
pub struct MarketDataCache {
    entries: RwLock<HashMap<PropId, Entry>>,
    policy: Box<dyn InvalidationPolicy>,
}

impl MarketDataCache {
    /// Create a cache with the given invalidation policy.
    pub fn new(policy: impl InvalidationPolicy + 'static) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            policy: Box::new(policy),
        }
    }

    /// Convenience constructor for a TTL-based cache.
    #[must_use]
    pub fn with_max_age(ttl: Duration) -> Self {
        Self::new(MaxAge::new(ttl))
    }

    /// Store a snapshot for a prop, replacing any previous one.
    pub fn insert(&self, prop: PropId, lines: Vec<LineOdds>) {
        trace!(prop = %prop, lines = lines.len(), "caching market snapshot");
        self.entries.write().insert(
            prop,
            Entry {
                lines,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Get a snapshot if present and still fresh under the policy.
    pub fn get(&self, prop: &PropId) -> Option<Vec<LineOdds>> {
        let entries = self.entries.read();
        let entry = entries.get(prop)?;
        if self.policy.is_expired(entry.inserted_at.elapsed()) {
            trace!(prop = %prop, "cached snapshot expired");
            return None;
        }
        Some(entry.lines.clone())
    }

    /// Drop a single prop's snapshot.
    pub fn invalidate(&self, prop: &PropId) {
        self.entries.write().remove(prop);
    }

    /// Drop every entry the policy considers expired.
    pub fn purge_expired(&self) {
        let mut entries = self.entries.write();
        entries.retain(|_, entry| !self.policy.is_expired(entry.inserted_at.elapsed()));
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of stored snapshots, including expired but unpurged ones.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmericanOdds;
    use rust_decimal_macros::dec;

    fn snapshot() -> Vec<LineOdds> {
        vec![LineOdds {
            line: dec!(249.5),
            over: AmericanOdds::try_new(-110).unwrap(),
            under: AmericanOdds::try_new(-110).unwrap(),
        }]
    }

    #[test]
    fn insert_and_get() {
        let cache = MarketDataCache::new(KeepForever);
        let prop = PropId::new("qb1-passing-yards");

        cache.insert(prop.clone(), snapshot());
        let lines = cache.get(&prop).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line, dec!(249.5));
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let cache = MarketDataCache::with_max_age(Duration::ZERO);
        let prop = PropId::new("qb1-passing-yards");

        cache.insert(prop.clone(), snapshot());
        assert!(cache.get(&prop).is_none());
        // Expired entries still count until purged.
        assert_eq!(cache.len(), 1);

        cache.purge_expired();
        assert!(cache.is_empty());
    }

    #[test]
    fn long_ttl_serves_fresh_entries() {
        let cache = MarketDataCache::with_max_age(Duration::from_secs(600));
        let prop = PropId::new("qb1-passing-yards");

        cache.insert(prop.clone(), snapshot());
        assert!(cache.get(&prop).is_some());
    }

    #[test]
    fn invalidate_and_clear() {
        let cache = MarketDataCache::new(KeepForever);
        let first = PropId::new("prop-a");
        let second = PropId::new("prop-b");

        cache.insert(first.clone(), snapshot());
        cache.insert(second.clone(), snapshot());
        assert_eq!(cache.len(), 2);

        cache.invalidate(&first);
        assert!(cache.get(&first).is_none());
        assert!(cache.get(&second).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }
}
