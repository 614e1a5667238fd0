//! Time-to-live cache with lazy expiry

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// A cached value together with its insertion time and lifetime
///
/// Expiry is computed as `inserted_at + ttl` and never resets on read: there
/// is no sliding expiration. Once past its deadline an entry is dead and can
/// only be replaced by a fresh insert, never resurrected.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn new(value: V, inserted_at: Instant, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at,
            ttl,
        }
    }

    /// Whether this entry is still alive at `now`
    ///
    /// Strictly one-directional: alive iff `now < inserted_at + ttl`.
    fn is_live(&self, now: Instant) -> bool {
        match self.inserted_at.checked_add(self.ttl) {
            Some(deadline) => now < deadline,
            // ttl so large the deadline overflows Instant: never expires
            None => true,
        }
    }
}

/// Mapping from key to TTL-bounded value with lazy expiry at read time
///
/// Each key's entry is independent; inserting one key never affects another.
/// The cache itself is not synchronized: callers that share it across tasks
/// wrap it in a lock, the way [`CachingClient`](crate::client::CachingClient)
/// does.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use corebridge::cache::TtlCache;
///
/// let mut cache: TtlCache<&str, u64> = TtlCache::new(Duration::from_secs(20));
/// cache.insert("key", 42);
/// assert_eq!(cache.get(&"key"), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    default_ttl: Duration,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Create an empty cache whose entries live for `default_ttl`
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    /// The TTL applied to inserted entries
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Return the live value for `key`, if any
    ///
    /// An expired entry is logically gone: it is removed on this lookup and
    /// `None` is returned.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Insert `value` under `key`, replacing any previous entry
    ///
    /// The entry's lifetime starts now; replacing an entry restarts its TTL.
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Drop every expired entry to reclaim memory
    ///
    /// Optional housekeeping only: lookups already ignore expired entries.
    pub fn purge_expired(&mut self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.is_live(now));
    }

    /// Number of stored entries, including not-yet-purged expired ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clock-injectable lookup, used by tests to pin expiry boundaries
    pub(crate) fn get_at(&mut self, key: &K, now: Instant) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Clock-injectable insert, used by tests to pin expiry boundaries
    pub(crate) fn insert_at(&mut self, key: K, value: V, now: Instant) {
        self.entries
            .insert(key, CacheEntry::new(value, now, self.default_ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(20);
    const EPSILON: Duration = Duration::from_millis(1);

    #[test]
    fn test_empty_cache_returns_none() {
        let mut cache: TtlCache<&str, u64> = TtlCache::new(TTL);
        assert_eq!(cache.get(&"missing"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = TtlCache::new(TTL);
        cache.insert("key", 7u64);
        assert_eq!(cache.get(&"key"), Some(7));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_read_just_before_expiry_hits() {
        let mut cache = TtlCache::new(TTL);
        let t0 = Instant::now();
        cache.insert_at("key", 7u64, t0);

        // t0 + TTL - epsilon: still live
        assert_eq!(cache.get_at(&"key", t0 + TTL - EPSILON), Some(7));
    }

    #[test]
    fn test_read_at_and_after_expiry_misses() {
        let mut cache = TtlCache::new(TTL);
        let t0 = Instant::now();
        cache.insert_at("key", 7u64, t0);

        // Expiry is strict: the deadline itself is already dead
        assert_eq!(cache.get_at(&"key", t0 + TTL), None);

        cache.insert_at("key", 7u64, t0);
        assert_eq!(cache.get_at(&"key", t0 + TTL + EPSILON), None);
    }

    #[test]
    fn test_expired_entry_is_removed_on_lookup() {
        let mut cache = TtlCache::new(TTL);
        let t0 = Instant::now();
        cache.insert_at("key", 7u64, t0);

        assert_eq!(cache.get_at(&"key", t0 + TTL + EPSILON), None);
        // Logical deletion happened on the lookup above
        assert!(cache.is_empty());
    }

    #[test]
    fn test_no_sliding_expiration() {
        let mut cache = TtlCache::new(TTL);
        let t0 = Instant::now();
        cache.insert_at("key", 7u64, t0);

        // Reads part-way through the lifetime must not extend the deadline
        assert_eq!(cache.get_at(&"key", t0 + TTL / 2), Some(7));
        assert_eq!(cache.get_at(&"key", t0 + TTL - EPSILON), Some(7));
        assert_eq!(cache.get_at(&"key", t0 + TTL + EPSILON), None);
    }

    #[test]
    fn test_reinsert_restarts_ttl() {
        let mut cache = TtlCache::new(TTL);
        let t0 = Instant::now();
        cache.insert_at("key", 1u64, t0);

        let t1 = t0 + TTL / 2;
        cache.insert_at("key", 2u64, t1);

        // Old deadline passed, new entry still live
        assert_eq!(cache.get_at(&"key", t0 + TTL + EPSILON), Some(2));
        assert_eq!(cache.get_at(&"key", t1 + TTL + EPSILON), None);
    }

    #[test]
    fn test_keys_expire_independently() {
        let mut cache = TtlCache::new(TTL);
        let t0 = Instant::now();
        cache.insert_at("a", 1u64, t0);
        cache.insert_at("b", 2u64, t0 + TTL / 2);

        let after_a = t0 + TTL + EPSILON;
        assert_eq!(cache.get_at(&"a", after_a), None);
        assert_eq!(cache.get_at(&"b", after_a), Some(2));
    }

    #[test]
    fn test_purge_expired_reclaims_entries() {
        let mut cache = TtlCache::new(Duration::ZERO);
        cache.insert("a", 1u64);
        cache.insert("b", 2u64);
        assert_eq!(cache.len(), 2);

        cache.purge_expired();
        assert!(cache.is_empty());
    }
}
