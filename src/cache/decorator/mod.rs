//! Backend Decorators
//!
//! Backends that wrap another [`Backend`](crate::cache::Backend) and rewrite
//! arguments before delegating. Decorators own their inner backend and are
//! backends themselves, so they nest in any order.
//!
//! # Example
//! ```
//! use lazy_cache::cache::{ArrayBackend, DefaultTimeout, KeyPrefix, Lazy};
//!
//! let backend = KeyPrefix::new(DefaultTimeout::new(ArrayBackend::new(), 300), "users.");
//! let mut cache = Lazy::new(backend);
//! cache.save("42", "Alice").unwrap();
//! assert!(cache.contains("42").unwrap());
//! ```

mod default_timeout;
mod key_prefix;

pub use default_timeout::DefaultTimeout;
pub use key_prefix::KeyPrefix;

use serde::Deserialize;

use crate::error::{CacheError, Result};

// == Decorator Options ==
/// Construction options shared by the decorators.
///
/// Read from a mapping with the keys `keyPrefix` and `defaultTimeout`.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratorOptions {
    /// Prefix applied by [`KeyPrefix`]
    #[serde(default)]
    pub key_prefix: Option<String>,
    /// Lifetime in seconds applied by [`DefaultTimeout`]
    #[serde(default)]
    pub default_timeout: Option<u64>,
}

impl DecoratorOptions {
    /// Reads options from a JSON mapping.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| CacheError::InvalidOptions(e.to_string()))
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn with_default_timeout(mut self, seconds: u64) -> Self {
        self.default_timeout = Some(seconds);
        self
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Spy backend recording every call it receives.

    use crate::cache::{Backend, CacheValue};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Fetch(String),
        Contains(String),
        Save(String, CacheValue, Option<u64>),
        Delete(String),
        Flush,
    }

    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        pub calls: Vec<Call>,
    }

    impl Backend for RecordingBackend {
        fn fetch(&mut self, id: &str) -> Option<CacheValue> {
            self.calls.push(Call::Fetch(id.to_string()));
            None
        }

        fn contains(&mut self, id: &str) -> bool {
            self.calls.push(Call::Contains(id.to_string()));
            false
        }

        fn save(&mut self, id: &str, value: CacheValue, ttl: Option<u64>) -> bool {
            self.calls.push(Call::Save(id.to_string(), value, ttl));
            true
        }

        fn delete(&mut self, id: &str) -> bool {
            self.calls.push(Call::Delete(id.to_string()));
            true
        }

        fn flush(&mut self) -> bool {
            self.calls.push(Call::Flush);
            true
        }
    }
}
