//! API Module
//!
//! HTTP handlers and routing exposing the cache facade as a JSON API.
//!
//! # Endpoints
//! - `PUT /cache/:id` - Save a value (`{"value": ..., "ttl": ...}`)
//! - `GET /cache/:id` - Fetch a value
//! - `DELETE /cache/:id` - Delete a value
//! - `GET /cache/:id/exists` - Check for a value
//! - `DELETE /cache` - Flush the backend
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
