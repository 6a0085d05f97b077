//! HTTP DTOs for analytics endpoints.
//!
//! Analytics is read-only, so we only have response DTOs.
//! The domain report types are already designed for serialization,
//! so we re-export them directly.

pub use crate::domain::analytics::{QuestionReport, QuestionShare, ReportSummary};

use serde::Serialize;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_parameter(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            code: "INVALID_PARAMETER".to_string(),
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_omits_empty_details() {
        let value = serde_json::to_value(ErrorResponse::bad_request("Survey ID required")).unwrap();
        assert_eq!(value, json!({"code": "BAD_REQUEST", "message": "Survey ID required"}));
    }

    #[test]
    fn invalid_parameter_carries_details() {
        let error = ErrorResponse::invalid_parameter("bad", json!({"parameter": "groupBy"}));
        let value = serde_json::to_value(error).unwrap();
        assert_eq!(value["details"]["parameter"], "groupBy");
    }
}
