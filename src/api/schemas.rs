// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Body of every admin save.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SavedRecord<T> {
    pub record: T,
    /// Non-empty when an attachment could not be stored and the record was
    /// saved without it.
    pub warnings: Vec<String>,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Validation failed")]
    pub message: String,

    /// One entry per failed field, only on validation errors
    pub details: Option<Vec<FieldErrorDetail>>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDetail {
    #[schema(example = "birth_date")]
    pub field: Option<String>,
    #[schema(example = "OUT_OF_RANGE")]
    pub code: String,
    #[schema(example = "La fecha debe estar entre 1981-01-01 y 2026-01-31")]
    pub message: String,
}
