use std::any::Any;

use axum::{
    body::Body,
    http::{Response as HttpResponse, StatusCode},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse, error_response};

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound.default_message(),
        ErrorCode::NotFound,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message(),
        ErrorCode::MethodNotAllowed,
    )
}

/// Converts a panic caught by `CatchPanicLayer` into a standard 500 body.
///
/// The listener keeps serving other requests.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> HttpResponse<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(
        error_code = ErrorCode::InternalError.code(),
        panic = %detail,
        "Request handler panicked"
    );

    let body = axum::Json(ErrorResponse::new(
        ErrorCode::InternalError,
        ErrorCode::InternalError.default_message(),
    ));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
