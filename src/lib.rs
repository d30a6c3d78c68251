//! Lazy Cache - A validating cache facade over decoratable backends
//!
//! The [`cache::Lazy`] facade checks ids and values, then forwards to a
//! [`cache::Backend`]. Backends can be wrapped in decorators that namespace
//! ids or supply default lifetimes. A small HTTP server exposes the facade.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Backend, CacheValue, Lazy};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
