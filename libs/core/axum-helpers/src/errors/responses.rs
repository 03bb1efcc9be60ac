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
        "error": "Failed to access item storage",
        "code": 2001,
        "kind": "STORAGE_ERROR"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Item not found",
        "code": 1004,
        "kind": "NOT_FOUND"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body is not a JSON object",
    content_type = "application/json",
    example = json!({
        "error": "Failed to parse the request body as JSON",
        "code": 1003,
        "kind": "JSON_EXTRACTION"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body is JSON but a field has the wrong type",
    content_type = "application/json",
    example = json!({
        "error": "Failed to deserialize the JSON body into the target type: price: invalid type: string \"12\", expected a number",
        "code": 1003,
        "kind": "JSON_EXTRACTION"
    })
)]
pub struct UnprocessableJsonResponse(pub ErrorResponse);
