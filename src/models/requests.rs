//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::CacheValue;

/// Request body for the save operation (PUT /cache/:id)
///
/// # Fields
/// - `value`: Any JSON value; it is stored as plain data
/// - `ttl`: Optional TTL in seconds, `0` = never expire. When absent the
///   server's default timeout applies, if one is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    /// The value to store
    pub value: CacheValue,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_deserialize() {
        let json = r#"{"value": "hello"}"#;
        let req: SaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, CacheValue::from("hello"));
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_save_request_with_ttl_and_structure() {
        let json = r#"{"value": {"a": [1, 2.5]}, "ttl": 0}"#;
        let req: SaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(0));
        assert!(matches!(req.value, CacheValue::Map(_)));
    }

    #[test]
    fn test_save_request_missing_value() {
        let result: Result<SaveRequest, _> = serde_json::from_str(r#"{"ttl": 5}"#);
        assert!(result.is_err());
    }
}
