//! Time-bounded in-memory response cache.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Cache identity of a subtree request.
///
/// Ids are sorted and deduplicated, so the same set requested in any order
/// hits the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    file_key: String,
    node_ids: Vec<String>,
}

impl CacheKey {
    pub fn new(file_key: &str, node_ids: &[String]) -> Self {
        let mut node_ids = node_ids.to_vec();
        node_ids.sort();
        node_ids.dedup();
        Self {
            file_key: file_key.to_string(),
            node_ids,
        }
    }
}

struct Entry<T> {
    value: Arc<T>,
    stored_at: Instant,
}

/// Process-local cache with a fixed time-to-live.
///
/// Concurrent misses for the same key may both fetch; the last insert wins.
pub(crate) struct ResponseCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, Entry<T>>>,
}

impl<T> ResponseCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh entry for `key`. Expired entries are evicted on lookup.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<T>> {
        let mut entries = self.entries.lock();
        let lookup = entries
            .get(key)
            .map(|entry| (entry.stored_at.elapsed() < self.ttl, Arc::clone(&entry.value)));
        match lookup {
            Some((true, value)) => Some(value),
            Some((false, _)) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `value`, dropping every entry that has already expired.
    pub fn insert(&self, key: CacheKey, value: Arc<T>) {
        let mut entries = self.entries.lock();
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_key_ignores_id_order() {
        assert_eq!(
            CacheKey::new("abc", &ids(&["1:3", "1:2"])),
            CacheKey::new("abc", &ids(&["1:2", "1:3", "1:2"]))
        );
        assert_ne!(
            CacheKey::new("abc", &ids(&["1:2"])),
            CacheKey::new("xyz", &ids(&["1:2"]))
        );
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let key = CacheKey::new("abc", &ids(&["1:2"]));
        cache.insert(key.clone(), Arc::new(42));

        assert_eq!(cache.get(&key).as_deref(), Some(&42));
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = ResponseCache::new(Duration::ZERO);
        let key = CacheKey::new("abc", &ids(&["1:2"]));
        cache.insert(key.clone(), Arc::new(42));

        assert!(cache.get(&key).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_insert_drops_stale_entries_of_other_keys() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert(CacheKey::new("abc", &ids(&["1:2"])), Arc::new(1));
        cache.insert(CacheKey::new("abc", &ids(&["1:3"])), Arc::new(2));
        cache.insert(CacheKey::new("xyz", &ids(&["9:9"])), Arc::new(3));

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_keeps_fresh_entries() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert(CacheKey::new("abc", &ids(&["1:2"])), Arc::new(1));
        cache.insert(CacheKey::new("abc", &ids(&["1:3"])), Arc::new(2));

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert(CacheKey::new("abc", &ids(&["1:2"])), Arc::new(1));
        cache.insert(CacheKey::new("abc", &ids(&["1:3"])), Arc::new(2));

        cache.clear();

        assert_eq!(cache.len(), 0);
    }
}
