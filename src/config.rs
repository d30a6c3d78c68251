//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use crate::cache::DecoratorOptions;

/// Server configuration parameters.
///
/// All values can be configured via environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Namespace prefix for every cache id; None = no prefixing layer
    pub key_prefix: Option<String>,
    /// Lifetime in seconds for saves without one; None = entries never expire
    pub default_timeout: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `CACHE_KEY_PREFIX` - Key prefix (default: unset)
    /// - `CACHE_DEFAULT_TIMEOUT` - Default TTL in seconds (default: unset)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            key_prefix: env::var("CACHE_KEY_PREFIX").ok(),
            default_timeout: env::var("CACHE_DEFAULT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Options for the decorator layers built on top of the backend.
    pub fn decorator_options(&self) -> DecoratorOptions {
        DecoratorOptions {
            key_prefix: self.key_prefix.clone(),
            default_timeout: self.default_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 1,
            key_prefix: None,
            default_timeout: None,
        }
    }
}
