//! Read-through TTL cache for computed roster responses.
//!
//! Keyed by resource identity, entries age out after the configured TTL and
//! are invalidated explicitly by writes. `get` reports staleness instead of
//! silently dropping aged entries, leaving the refresh decision to the
//! caller.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub struct TtlCache<K, V> {
    entries: Mutex<HashMap<K, (V, Instant)>>,
    ttl: Duration,
}

impl<K: Eq + Hash + Clone, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up a key. Returns the cached value together with a staleness
    /// flag; `None` if the key was never cached or has been invalidated.
    pub fn get(&self, key: &K) -> Option<(V, bool)> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries.get(key).map(|(value, stored_at)| {
            let is_stale = stored_at.elapsed() >= self.ttl;
            (value.clone(), is_stale)
        })
    }

    /// Store a freshly computed value.
    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(key, (value, Instant::now()));
    }

    /// Drop a key after a write made its cached value invalid.
    pub fn invalidate(&self, key: &K) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.remove(key);
    }
}
