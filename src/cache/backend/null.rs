//! Null Backend
//!
//! A backend that stores nothing. Useful for testing decorators and for
//! disabling caching.

use super::Backend;
use crate::cache::CacheValue;

/// Backend that accepts every write and never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for NullBackend {
    fn fetch(&mut self, _id: &str) -> Option<CacheValue> {
        None
    }

    fn contains(&mut self, _id: &str) -> bool {
        false
    }

    fn save(&mut self, _id: &str, _value: CacheValue, _ttl: Option<u64>) -> bool {
        true
    }

    fn delete(&mut self, _id: &str) -> bool {
        true
    }

    fn flush(&mut self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_backend_stores_nothing() {
        let mut backend = NullBackend::new();

        assert!(backend.save("id", CacheValue::Int(1), Some(10)));
        assert_eq!(backend.fetch("id"), None);
        assert!(!backend.contains("id"));
        assert!(backend.delete("id"));
        assert!(backend.flush());
        assert!(backend.stats().is_none());
        assert_eq!(backend.purge_expired(), 0);
    }
}
