use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use itemforge_items::ItemStore;

use crate::app::{dto, errors, SharedStore};

/// Item routes, mounted at the API root.
///
/// The collection is served with and without a trailing slash.
pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn list_items(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    let items = store
        .list()
        .into_iter()
        .map(dto::item_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_item_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.get(id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(store): Extension<SharedStore>,
    body: Result<Json<dto::ItemPayload>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let fields = match body.validate() {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let item = store.create(fields);
    (StatusCode::CREATED, Json(dto::item_to_json(item))).into_response()
}

pub async fn update_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<dto::ItemPayload>, JsonRejection>,
) -> axum::response::Response {
    let id = match dto::parse_item_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let fields = match body.validate() {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.update(id, fields) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_item_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
