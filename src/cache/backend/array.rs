//! Array Backend
//!
//! In-memory HashMap storage with lazy TTL expiration.

use std::collections::HashMap;

use tracing::debug;

use super::Backend;
use crate::cache::{CacheEntry, CacheStats, CacheValue};

// == Array Backend ==
/// In-memory terminal backend.
///
/// Expired entries are treated as absent and dropped when touched by
/// `fetch` or `contains`; [`purge_expired`](Backend::purge_expired) sweeps
/// the rest.
#[derive(Debug, Default)]
pub struct ArrayBackend {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl ArrayBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the live entry under `id`, dropping it first if expired.
    fn live_entry(&mut self, id: &str) -> Option<&CacheEntry> {
        if self.entries.get(id).is_some_and(CacheEntry::is_expired) {
            self.entries.remove(id);
            self.stats.set_total_entries(self.entries.len());
            debug!(id, "dropped expired entry");
        }
        self.entries.get(id)
    }
}

impl Backend for ArrayBackend {
    fn fetch(&mut self, id: &str) -> Option<CacheValue> {
        let value = self.live_entry(id).map(|entry| entry.value.clone());
        self.stats.record_fetch(value.is_some());
        value
    }

    fn contains(&mut self, id: &str) -> bool {
        self.live_entry(id).is_some()
    }

    fn save(&mut self, id: &str, value: CacheValue, ttl: Option<u64>) -> bool {
        self.entries
            .insert(id.to_string(), CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
        true
    }

    fn delete(&mut self, id: &str) -> bool {
        self.entries.remove(id);
        self.stats.set_total_entries(self.entries.len());
        true
    }

    fn flush(&mut self) -> bool {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        debug!(count, "flushed array backend");
        true
    }

    fn stats(&self) -> Option<CacheStats> {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        Some(stats)
    }

    fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_backend_new() {
        let backend = ArrayBackend::new();
        assert_eq!(backend.len(), 0);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_save_and_fetch() {
        let mut backend = ArrayBackend::new();

        assert!(backend.save("key1", CacheValue::from("value1"), None));
        assert_eq!(backend.fetch("key1"), Some(CacheValue::from("value1")));
        assert!(backend.contains("key1"));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_fetch_nonexistent() {
        let mut backend = ArrayBackend::new();
        assert_eq!(backend.fetch("nonexistent"), None);
        assert!(!backend.contains("nonexistent"));
    }

    #[test]
    fn test_overwrite() {
        let mut backend = ArrayBackend::new();

        backend.save("key1", CacheValue::Int(1), None);
        backend.save("key1", CacheValue::Int(2), None);

        assert_eq!(backend.fetch("key1"), Some(CacheValue::Int(2)));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut backend = ArrayBackend::new();

        backend.save("key1", CacheValue::Int(1), None);
        assert!(backend.delete("key1"));
        assert!(backend.delete("key1"));
        assert!(backend.is_empty());
    }

    #[test]
    fn test_flush() {
        let mut backend = ArrayBackend::new();

        backend.save("a", CacheValue::Int(1), None);
        backend.save("prefixed_b", CacheValue::Int(2), Some(60));

        assert!(backend.flush());
        assert!(backend.is_empty());
        assert!(!backend.contains("a"));
        assert!(!backend.contains("prefixed_b"));
    }

    #[test]
    fn test_ttl_expiration() {
        let mut backend = ArrayBackend::new();

        backend.save("key1", CacheValue::from("value1"), Some(1));
        assert!(backend.contains("key1"));

        sleep(Duration::from_millis(1100));

        assert!(!backend.contains("key1"));
        assert_eq!(backend.fetch("key1"), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        let mut backend = ArrayBackend::new();

        backend.save("key1", CacheValue::Int(1), Some(0));
        let entry = backend.entries.get("key1").unwrap();
        assert!(entry.expires_at.is_none());
    }

    #[test]
    fn test_stats() {
        let mut backend = ArrayBackend::new();

        backend.save("key1", CacheValue::Int(1), None);
        backend.fetch("key1");
        backend.fetch("nonexistent");
        backend.contains("key1");

        let stats = backend.stats().unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_purge_expired() {
        let mut backend = ArrayBackend::new();

        backend.save("key1", CacheValue::Int(1), Some(1));
        backend.save("key2", CacheValue::Int(2), Some(10));
        backend.save("key3", CacheValue::Int(3), None);

        sleep(Duration::from_millis(1100));

        assert_eq!(backend.purge_expired(), 1);
        assert_eq!(backend.len(), 2);
        assert!(backend.contains("key2"));
        assert!(backend.contains("key3"));
    }
}
