//! Lazy Cache Facade
//!
//! Public entry point of the cache layer: validates ids and values, then
//! forwards to a [`Backend`].

use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{validate_id, Backend, CacheStats, CacheValue};
use crate::error::Result;

// == Lazy ==
/// Validating facade over a storage backend.
///
/// Every per-id operation rejects empty ids and ids with characters outside
/// `[A-Za-z0-9_.-]` before the backend is touched.
///
/// # Example
/// ```
/// use lazy_cache::cache::{ArrayBackend, CacheValue, Lazy};
///
/// let mut cache = Lazy::new(ArrayBackend::new());
/// cache.save("answer", 42).unwrap();
/// assert_eq!(cache.fetch("answer").unwrap(), Some(CacheValue::Int(42)));
/// assert!(cache.fetch("bad/id").is_err());
/// ```
#[derive(Debug)]
pub struct Lazy<B> {
    backend: B,
}

impl<B: Backend> Lazy<B> {
    // == Constructor ==
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    // == Fetch ==
    /// Returns the value stored under `id`, or `None` when there is none.
    ///
    /// A stored `CacheValue::Bool(false)` comes back as `Some`, so callers
    /// can tell it apart from a miss.
    pub fn fetch(&mut self, id: &str) -> Result<Option<CacheValue>> {
        self.check_id(id)?;
        Ok(self.backend.fetch(id))
    }

    // == Contains ==
    pub fn contains(&mut self, id: &str) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.backend.contains(id))
    }

    // == Save ==
    /// Stores `value` without a lifetime.
    ///
    /// The backend decides what no lifetime means; a
    /// [`DefaultTimeout`](crate::cache::DefaultTimeout) layer fills one in.
    pub fn save(&mut self, id: &str, value: impl Into<CacheValue>) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.backend.save(id, value.into(), None))
    }

    /// Stores `value` for `ttl` seconds; `0` means it never expires.
    pub fn save_with_ttl(&mut self, id: &str, value: impl Into<CacheValue>, ttl: u64) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.backend.save(id, value.into(), Some(ttl)))
    }

    /// Stores any serializable value after reducing it to plain data.
    ///
    /// Values that do not serialize to plain data fail with
    /// [`CacheError::ObjectNotCacheable`](crate::error::CacheError::ObjectNotCacheable).
    pub fn save_serialized<T>(&mut self, id: &str, value: &T, ttl: Option<u64>) -> Result<bool>
    where
        T: Serialize + ?Sized,
    {
        self.check_id(id)?;
        let value = CacheValue::from_serialize(value).inspect_err(|e| {
            debug!(id, error = %e, "rejected value");
        })?;
        Ok(self.backend.save(id, value, ttl))
    }

    // == Delete ==
    /// Removes the entry under `id`. Returns true even if there was none.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.backend.delete(id))
    }

    // == Flush All ==
    /// Removes every entry of the backend.
    pub fn flush_all(&mut self) -> bool {
        info!("flushing cache backend");
        self.backend.flush()
    }

    // == Maintenance ==
    pub fn stats(&self) -> Option<CacheStats> {
        self.backend.stats()
    }

    pub fn purge_expired(&mut self) -> usize {
        self.backend.purge_expired()
    }

    // == Accessors ==
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct access to the backend. Calls made through it skip id checks.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    fn check_id(&self, id: &str) -> Result<()> {
        validate_id(id).inspect_err(|e| debug!(error = %e, "rejected cache id"))
    }
}
