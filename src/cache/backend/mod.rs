//! Storage Backends
//!
//! The [`Backend`] trait is the capability set every storage layer provides,
//! terminal stores and decorators alike.

mod array;
mod null;

pub use array::ArrayBackend;
pub use null::NullBackend;

use crate::cache::{CacheStats, CacheValue};

// == Backend Trait ==
/// Key-value storage driven by the [`Lazy`](crate::cache::Lazy) facade.
///
/// Ids reaching a backend have already been validated. The `ttl` passed to
/// [`save`](Backend::save) is `None` when the caller gave no lifetime and
/// `Some(0)` for an explicit "never expire".
pub trait Backend: Send + Sync {
    /// Returns the value stored under `id`, if any.
    fn fetch(&mut self, id: &str) -> Option<CacheValue>;

    /// Tests whether an entry exists under `id`.
    fn contains(&mut self, id: &str) -> bool;

    /// Stores `value` under `id`, replacing any previous entry.
    fn save(&mut self, id: &str, value: CacheValue, ttl: Option<u64>) -> bool;

    /// Removes the entry under `id`. Succeeds when there was none.
    fn delete(&mut self, id: &str) -> bool;

    /// Removes every entry held by the backend.
    fn flush(&mut self) -> bool;

    /// Returns hit/miss counters, for backends that keep them.
    fn stats(&self) -> Option<CacheStats> {
        None
    }

    /// Drops expired entries and returns how many were removed.
    fn purge_expired(&mut self) -> usize {
        0
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn fetch(&mut self, id: &str) -> Option<CacheValue> {
        (**self).fetch(id)
    }

    fn contains(&mut self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn save(&mut self, id: &str, value: CacheValue, ttl: Option<u64>) -> bool {
        (**self).save(id, value, ttl)
    }

    fn delete(&mut self, id: &str) -> bool {
        (**self).delete(id)
    }

    fn flush(&mut self) -> bool {
        (**self).flush()
    }

    fn stats(&self) -> Option<CacheStats> {
        (**self).stats()
    }

    fn purge_expired(&mut self) -> usize {
        (**self).purge_expired()
    }
}
