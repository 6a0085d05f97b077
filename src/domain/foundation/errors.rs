//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' must be one of [{expected}], got '{actual}'")]
    UnknownVariant {
        field: String,
        expected: String,
        actual: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown variant error listing the accepted values.
    pub fn unknown_variant(
        field: impl Into<String>,
        expected: &[&str],
        actual: impl Into<String>,
    ) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            expected: expected.join(", "),
            actual: actual.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownVariant { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    InvalidParameter,

    // Data errors
    MalformedAnswer,

    // Not found errors
    SurveyNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::MalformedAnswer => "MALFORMED_ANSWER",
            ErrorCode::SurveyNotFound => "SURVEY_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::UnknownVariant { .. } => ErrorCode::InvalidParameter,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("survey_id");
        assert_eq!(format!("{}", err), "Field 'survey_id' cannot be empty");
    }

    #[test]
    fn validation_error_unknown_variant_lists_expected_values() {
        let err = ValidationError::unknown_variant("timeRange", &["day", "week"], "fortnight");
        assert_eq!(
            format!("{}", err),
            "Field 'timeRange' must be one of [day, week], got 'fortnight'"
        );
        assert_eq!(err.field(), "timeRange");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SurveyNotFound, "Survey not found");
        assert_eq!(format!("{}", err), "[SURVEY_NOT_FOUND] Survey not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "groupBy")
            .with_detail("reason", "unsupported");

        assert_eq!(err.details.get("field"), Some(&"groupBy".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"unsupported".to_string()));
    }

    #[test]
    fn unknown_variant_converts_to_invalid_parameter() {
        let err: DomainError = ValidationError::unknown_variant("groupBy", &["group"], "team").into();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert_eq!(err.details.get("field"), Some(&"groupBy".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidParameter), "INVALID_PARAMETER");
        assert_eq!(format!("{}", ErrorCode::MalformedAnswer), "MALFORMED_ANSWER");
    }
}
