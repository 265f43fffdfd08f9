//! HTTP API Module
//!
//! Maps the service endpoints onto the Axum router.
//!
//! ## Endpoints
//! - `POST /hash`: Accept a password, respond with its identifier.
//! - `GET /hash/{id}`: Fetch the stored digest by identifier.
//! - `GET /stats`: Request count and average latency snapshot.
//! - `GET /shutdown`: Initiate the one-shot delayed termination.
//!
//! ## Submodules
//! - **`gate`**: Middleware that rejects every request once shutdown begins.
//! - **`handlers`**: Request handlers for the individual endpoints.
//! - **`types`**: Request/response DTOs.

pub mod gate;
pub mod handlers;
pub mod types;


use crate::service::hasher::HashService;
use crate::service::shutdown::ShutdownCoordinator;

use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Builds the service router with its shared state attached.
///
/// The shutdown gate wraps every route, so a request to any path or verb is
/// refused with 503 once the shutdown flag is set.
pub fn router(service: Arc<HashService>, coordinator: Arc<ShutdownCoordinator>) -> Router {
    Router::new()
        .route("/hash", post(handlers::handle_create_hash))
        .route("/hash/{id}", get(handlers::handle_fetch_hash))
        .route("/stats", get(handlers::handle_stats))
        .route("/shutdown", get(handlers::handle_shutdown))
        .layer(middleware::from_fn(gate::reject_when_shutting_down))
        .layer(Extension(service))
        .layer(Extension(coordinator))
}
