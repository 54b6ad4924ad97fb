//! Explicit URL → extracted-text cache.
//!
//! Callers construct one and pass it into [`crate::fetch_page_text`]; there
//! is no ambient process-wide map. Capacity is bounded and the oldest entry
//! is evicted first.

use std::collections::{HashMap, VecDeque};

/// Bounded memoization of extracted page text, keyed by URL.
#[derive(Debug)]
pub struct PageCache {
    capacity: usize,
    entries: HashMap<String, String>,
    /// Insertion order; front is the oldest entry.
    order: VecDeque<String>,
}

impl PageCache {
    /// Creates a cache holding at most `capacity` entries. A capacity of
    /// zero disables caching entirely.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Creates a cache sized from [`hwsearch_core::AppConfig`].
    #[must_use]
    pub fn from_config(config: &hwsearch_core::AppConfig) -> Self {
        Self::new(config.extract_cache_capacity)
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    /// Stores `text` under `url`, evicting the oldest entry when full.
    /// Re-inserting an existing URL replaces its text without changing
    /// its eviction position.
    pub fn insert(&mut self, url: String, text: String) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(url.clone(), text).is_some() {
            return;
        }
        self.order.push_back(url);
        if self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_entries() {
        let mut cache = PageCache::new(4);
        cache.insert("https://a.example".to_string(), "text a".to_string());
        assert_eq!(cache.get("https://a.example"), Some("text a"));
        assert_eq!(cache.get("https://b.example"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_oldest_entry_at_capacity() {
        let mut cache = PageCache::new(2);
        cache.insert("https://a.example".to_string(), "a".to_string());
        cache.insert("https://b.example".to_string(), "b".to_string());
        cache.insert("https://c.example".to_string(), "c".to_string());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("https://a.example"), None, "oldest evicted");
        assert_eq!(cache.get("https://b.example"), Some("b"));
        assert_eq!(cache.get("https://c.example"), Some("c"));
    }

    #[test]
    fn reinserting_replaces_text_without_growing() {
        let mut cache = PageCache::new(2);
        cache.insert("https://a.example".to_string(), "old".to_string());
        cache.insert("https://a.example".to_string(), "new".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("https://a.example"), Some("new"));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = PageCache::new(0);
        cache.insert("https://a.example".to_string(), "a".to_string());
        assert!(cache.is_empty());
        assert_eq!(cache.get("https://a.example"), None);
    }
}
