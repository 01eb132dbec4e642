// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase", bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// HTTP status code echoed in the body
    #[schema(example = 200)]
    pub status_code: u16,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = 404)]
    pub status_code: u16,

    /// Error code for programmatic handling
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub message: String,

    /// One entry per failed validation rule
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["title should not be empty"]))]
    pub errors: Option<Vec<String>>,
}
