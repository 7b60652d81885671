use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemforge_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        err @ DomainError::NotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        DomainError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_id", msg),
    }
}

/// Map a body-extraction failure onto the same error shape as domain errors.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    match rejection {
        JsonRejection::JsonDataError(e) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            e.body_text(),
        ),
        JsonRejection::JsonSyntaxError(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_json", e.body_text())
        }
        JsonRejection::MissingJsonContentType(e) => json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_media_type",
            e.body_text(),
        ),
        other => json_error(StatusCode::BAD_REQUEST, "bad_request", other.body_text()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
