use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error occurred";

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

/// Map a body that failed to deserialize into a structured client error.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    match rejection {
        JsonRejection::MissingJsonContentType(e) => json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_media_type",
            e.body_text(),
        ),
        JsonRejection::JsonDataError(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", e.body_text())
        }
        JsonRejection::JsonSyntaxError(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", e.body_text())
        }
        other => json_error(other.status(), "invalid_body", other.body_text()),
    }
}

pub fn internal_error() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        INTERNAL_ERROR_MESSAGE,
    )
}

/// Last-resort handler for panics escaping a handler; the detail is logged, never returned.
pub fn panic_to_response(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "handler panicked");
    internal_error()
}
