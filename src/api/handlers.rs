//! API Handlers
//!
//! HTTP request handlers mapping each endpoint onto the cache facade.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{
    ArrayBackend, Backend, DecoratorOptions, DefaultTimeout, KeyPrefix, Lazy,
};
use crate::config::Config;
use crate::error::{ApiError, ApiResult, Result};
use crate::models::{
    DeleteResponse, ExistsResponse, FetchResponse, FlushResponse, HealthResponse, SaveRequest,
    SaveResponse, StatsResponse,
};

/// Facade over a boxed decorator chain, shared between handlers and tasks.
pub type SharedCache = Arc<RwLock<Lazy<Box<dyn Backend>>>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache facade
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around the given backend.
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(Lazy::new(backend))),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Layers an in-memory backend with the decorators the config asks for.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(build_backend(&config.decorator_options())?))
    }
}

/// Builds `ArrayBackend`, wrapped in `DefaultTimeout` and then `KeyPrefix`
/// when the corresponding option is set.
pub fn build_backend(options: &DecoratorOptions) -> Result<Box<dyn Backend>> {
    let mut backend: Box<dyn Backend> = Box::new(ArrayBackend::new());
    if options.default_timeout.is_some() {
        backend = Box::new(DefaultTimeout::from_options(backend, options)?);
    }
    if options.key_prefix.is_some() {
        backend = Box::new(KeyPrefix::from_options(backend, options)?);
    }
    Ok(backend)
}

/// Handler for PUT /cache/:id
pub async fn save_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SaveRequest>,
) -> ApiResult<Json<SaveResponse>> {
    let mut cache = state.cache.write().await;
    let saved = match req.ttl {
        Some(ttl) => cache.save_with_ttl(&id, req.value, ttl)?,
        None => cache.save(&id, req.value)?,
    };

    Ok(Json(SaveResponse::new(id, saved)))
}

/// Handler for GET /cache/:id
pub async fn fetch_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FetchResponse>> {
    // Write lock: fetch updates stats and drops expired entries
    let mut cache = state.cache.write().await;
    match cache.fetch(&id)? {
        Some(value) => Ok(Json(FetchResponse::new(id, value))),
        None => Err(ApiError::NotFound(id)),
    }
}

/// Handler for GET /cache/:id/exists
pub async fn exists_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ExistsResponse>> {
    let mut cache = state.cache.write().await;
    let exists = cache.contains(&id)?;

    Ok(Json(ExistsResponse::new(id, exists)))
}

/// Handler for DELETE /cache/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let mut cache = state.cache.write().await;
    let deleted = cache.delete(&id)?;

    Ok(Json(DeleteResponse::new(id, deleted)))
}

/// Handler for DELETE /cache
pub async fn flush_handler(State(state): State<AppState>) -> Json<FlushResponse> {
    let mut cache = state.cache.write().await;
    Json(FlushResponse {
        flushed: cache.flush_all(),
    })
}

/// Handler for GET /stats
///
/// Backends without counters report zeros.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats().unwrap_or_default()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheValue, NullBackend};
    use crate::error::CacheError;

    fn state() -> AppState {
        AppState::new(Box::new(ArrayBackend::new()))
    }

    fn save_request(value: CacheValue, ttl: Option<u64>) -> Json<SaveRequest> {
        Json(SaveRequest { value, ttl })
    }

    #[tokio::test]
    async fn test_save_and_fetch_handler() {
        let state = state();

        let result = save_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            save_request(CacheValue::from("test_value"), None),
        )
        .await;
        assert!(result.is_ok());

        let response = fetch_handler(State(state), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, CacheValue::from("test_value"));
    }

    #[tokio::test]
    async fn test_fetch_missing_id() {
        let result = fetch_handler(State(state()), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_id_is_rejected() {
        let result = save_handler(
            State(state()),
            Path("bad*id".to_string()),
            save_request(CacheValue::Null, None),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Cache(CacheError::InvalidId(_)))));
    }

    #[tokio::test]
    async fn test_delete_and_exists_handlers() {
        let state = state();
        save_handler(
            State(state.clone()),
            Path("to_delete".to_string()),
            save_request(CacheValue::Int(1), Some(0)),
        )
        .await
        .unwrap();

        let exists = exists_handler(State(state.clone()), Path("to_delete".to_string()))
            .await
            .unwrap();
        assert!(exists.exists);

        let deleted = delete_handler(State(state.clone()), Path("to_delete".to_string()))
            .await
            .unwrap();
        assert!(deleted.deleted);

        let exists = exists_handler(State(state), Path("to_delete".to_string()))
            .await
            .unwrap();
        assert!(!exists.exists);
    }

    #[tokio::test]
    async fn test_stats_handler_without_counters() {
        let state = AppState::new(Box::new(NullBackend::new()));
        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_from_config_roundtrip() {
        let config = Config {
            key_prefix: Some("app.".to_string()),
            default_timeout: Some(60),
            ..Config::default()
        };
        let state = AppState::from_config(&config).unwrap();

        save_handler(
            State(state.clone()),
            Path("id".to_string()),
            save_request(CacheValue::Bool(false), None),
        )
        .await
        .unwrap();

        let response = fetch_handler(State(state), Path("id".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, CacheValue::Bool(false));
    }

    #[test]
    fn test_build_backend_prefixes_ids() {
        let options = DecoratorOptions::default().with_key_prefix("app.");
        let mut backend = build_backend(&options).unwrap();

        backend.save("id", CacheValue::Int(1), None);
        assert!(backend.contains("id"));
        assert!(!backend.contains("app.id"));
        assert_eq!(backend.stats().unwrap().total_entries, 1);
    }
}
