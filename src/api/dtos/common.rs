use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error category, e.g. "Validation error" or "Not found"
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Stable machine-readable code, e.g. `VALIDATION_ERROR`
    pub code: String,
    /// Per-field issues, present on validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
    pub code: String,
}
