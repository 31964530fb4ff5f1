use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `{ success: true, data, count? }`. `count` is only set for lists.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T> SuccessResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
        }
    }
}

/// `{ success: false, error }`
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// `{ success: true, message }`, returned by delete
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "Note deleted successfully".to_string(),
        }
    }
}

/// Links to the generated API documentation
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DocumentationLinks {
    pub redoc: String,
    pub openapi: String,
}

/// Service metadata served at `/`
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub total_notes: usize,
    pub documentation: DocumentationLinks,
}
