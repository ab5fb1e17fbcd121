//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "An internal server error occurred",
        "code": "INTERNAL_ERROR"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid body or failed validation",
    content_type = "application/json",
    example = json!({
        "error": "Request validation failed",
        "code": "VALIDATION_ERROR"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Not found",
        "code": "NOT_FOUND"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
