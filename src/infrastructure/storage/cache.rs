// In-memory suggestion cache keyed by query text
use crate::domain::model::Suggestion;
use dashmap::DashMap;

struct CacheEntry {
    items: Vec<Suggestion>,
    cached_at: i64,
}

/// Thread-safe TTL cache for suggest results.
///
/// Entries expire lazily on read; an expired hit is removed and treated
/// as a miss so the caller refreshes it from the service.
pub struct SuggestCache {
    map: DashMap<String, CacheEntry>,
}

impl SuggestCache {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub fn get(&self, key: &str, ttl_secs: i64) -> Option<Vec<Suggestion>> {
        let now = chrono::Utc::now().timestamp();
        let expired = match self.map.get(key) {
            Some(entry) if now - entry.cached_at < ttl_secs => {
                return Some(entry.items.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.map.remove(key);
        }
        None
    }

    pub fn insert(&self, key: &str, items: Vec<Suggestion>) {
        self.map.insert(
            key.to_string(),
            CacheEntry {
                items,
                cached_at: chrono::Utc::now().timestamp(),
            },
        );
    }

    pub fn clear(&self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SuggestCache {
    fn default() -> Self {
        Self::new()
    }
}
