//! Key-Prefix Decorator
//!
//! Namespaces the ids of one logical cache inside a shared backend.

use super::DecoratorOptions;
use crate::cache::{Backend, CacheStats, CacheValue};
use crate::error::{CacheError, Result};

// == Key Prefix ==
/// Prepends a fixed prefix to every id before delegating.
///
/// `flush` is passed through unprefixed and clears the whole inner backend,
/// including entries saved under other prefixes.
#[derive(Debug)]
pub struct KeyPrefix<B> {
    inner: B,
    prefix: String,
}

impl<B: Backend> KeyPrefix<B> {
    /// Wraps `inner`. An empty prefix is allowed and changes nothing.
    pub fn new(inner: B, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// Builds the decorator from the `keyPrefix` option.
    pub fn from_options(inner: B, options: &DecoratorOptions) -> Result<Self> {
        let prefix = options
            .key_prefix
            .clone()
            .ok_or(CacheError::MissingOption("keyPrefix"))?;
        Ok(Self::new(inner, prefix))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }

    fn prefixed(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }
}

impl<B: Backend> Backend for KeyPrefix<B> {
    fn fetch(&mut self, id: &str) -> Option<CacheValue> {
        let id = self.prefixed(id);
        self.inner.fetch(&id)
    }

    fn contains(&mut self, id: &str) -> bool {
        let id = self.prefixed(id);
        self.inner.contains(&id)
    }

    fn save(&mut self, id: &str, value: CacheValue, ttl: Option<u64>) -> bool {
        let id = self.prefixed(id);
        self.inner.save(&id, value, ttl)
    }

    fn delete(&mut self, id: &str) -> bool {
        let id = self.prefixed(id);
        self.inner.delete(&id)
    }

    fn flush(&mut self) -> bool {
        self.inner.flush()
    }

    fn stats(&self) -> Option<CacheStats> {
        self.inner.stats()
    }

    fn purge_expired(&mut self) -> usize {
        self.inner.purge_expired()
    }
}
