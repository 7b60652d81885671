//! HTTP API application wiring (Axum router + shared store).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request payloads, boundary validation, JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use itemforge_items::ItemStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// The store as handed to handlers. Built once in `main`, shared by every request.
pub type SharedStore = Arc<dyn ItemStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/v1", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(store)),
        )
}
