//! Error types for the cache layer
//!
//! `CacheError` is the single invalid-argument error of the facade and its
//! decorators. `ApiError` adds the HTTP-only "not found" case.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Invalid argument passed to the cache facade or a decorator constructor.
///
/// Every variant is recoverable by the caller. Absence of an entry is never
/// reported through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache id was the empty string
    #[error("Empty cache id")]
    EmptyId,

    /// The cache id contains characters outside `[A-Za-z0-9_.-]`
    #[error("Invalid cache id \"{0}\"")]
    InvalidId(String),

    /// The value does not reduce to plain data
    #[error("You cannot use this cache to cache an object: {0}")]
    ObjectNotCacheable(String),

    /// A decorator was built from options lacking its required key
    #[error("Missing required option \"{0}\"")]
    MissingOption(&'static str),

    /// The decorator options mapping could not be read
    #[error("Invalid decorator options: {0}")]
    InvalidOptions(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;

// == API Error Enum ==
/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected by the cache facade
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// No entry stored under the id
    #[error("Cache id not found: {0}")]
    NotFound(String),
}

/// Result type returned by the HTTP handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Cache(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::EmptyId.to_string(), "Empty cache id");
        assert!(CacheError::InvalidId("a/b".into())
            .to_string()
            .starts_with("Invalid cache id"));
        assert!(CacheError::ObjectNotCacheable("handle".into())
            .to_string()
            .contains("cannot use this cache to cache an object"));
        assert!(CacheError::MissingOption("keyPrefix")
            .to_string()
            .contains("keyPrefix"));
    }

    #[test]
    fn test_api_error_status() {
        let response = ApiError::from(CacheError::EmptyId).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound("missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
