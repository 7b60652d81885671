use axum::Router;

pub mod items;
pub mod system;

/// Router for the versioned API surface.
pub fn router() -> Router {
    items::router()
}
