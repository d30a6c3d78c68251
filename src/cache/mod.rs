//! Cache Module
//!
//! The [`Lazy`] facade, the [`Backend`] capability trait with its in-memory
//! and no-op implementations, and the backend decorators.

mod backend;
mod decorator;
mod entry;
mod id;
mod lazy;
mod stats;
mod value;


// Re-export public types
pub use backend::{ArrayBackend, Backend, NullBackend};
pub use decorator::{DecoratorOptions, DefaultTimeout, KeyPrefix};
pub use entry::CacheEntry;
pub use id::validate_id;
pub use lazy::Lazy;
pub use stats::CacheStats;
pub use value::CacheValue;
