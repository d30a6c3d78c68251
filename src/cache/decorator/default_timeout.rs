//! Default-Timeout Decorator

use super::DecoratorOptions;
use crate::cache::{Backend, CacheStats, CacheValue};
use crate::error::{CacheError, Result};

// == Default Timeout ==
/// Supplies a lifetime to saves that were given none.
///
/// An explicit lifetime, `Some(0)` included, is passed through unchanged.
#[derive(Debug)]
pub struct DefaultTimeout<B> {
    inner: B,
    default_ttl: u64,
}

impl<B: Backend> DefaultTimeout<B> {
    pub fn new(inner: B, default_ttl: u64) -> Self {
        Self { inner, default_ttl }
    }

    /// Builds the decorator from the `defaultTimeout` option.
    pub fn from_options(inner: B, options: &DecoratorOptions) -> Result<Self> {
        let default_ttl = options
            .default_timeout
            .ok_or(CacheError::MissingOption("defaultTimeout"))?;
        Ok(Self::new(inner, default_ttl))
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Backend> Backend for DefaultTimeout<B> {
    fn fetch(&mut self, id: &str) -> Option<CacheValue> {
        self.inner.fetch(id)
    }

    fn contains(&mut self, id: &str) -> bool {
        self.inner.contains(id)
    }

    fn save(&mut self, id: &str, value: CacheValue, ttl: Option<u64>) -> bool {
        let ttl = ttl.or(Some(self.default_ttl));
        self.inner.save(id, value, ttl)
    }

    fn delete(&mut self, id: &str) -> bool {
        self.inner.delete(id)
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
