//! Analytics-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ResponseId};

/// Errors raised while building a feedback report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A request option (time range, grouping key) was not recognized.
    InvalidParameter {
        parameter: String,
        value: String,
        expected: String,
    },
    /// An answer value could not be read as the type its question expects.
    ///
    /// Analyzers skip such answers instead of returning this error; it exists
    /// so the skip can be described and logged consistently.
    MalformedAnswer {
        question_id: QuestionId,
        response_id: ResponseId,
        reason: String,
    },
    /// An analyzer gave up on a question. Fails the whole report.
    AnalyzerFailed {
        question_id: QuestionId,
        reason: String,
    },
}

impl AnalyticsError {
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        AnalyticsError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }
    pub fn malformed_answer(
        question_id: QuestionId,
        response_id: ResponseId,
        reason: impl Into<String>,
    ) -> Self {
        AnalyticsError::MalformedAnswer {
            question_id,
            response_id,
            reason: reason.into(),
        }
    }
    pub fn analyzer_failed(question_id: QuestionId, reason: impl Into<String>) -> Self {
        AnalyticsError::AnalyzerFailed {
            question_id,
            reason: reason.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalyticsError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            AnalyticsError::MalformedAnswer { .. } => ErrorCode::MalformedAnswer,
            AnalyticsError::AnalyzerFailed { .. } => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AnalyticsError::InvalidParameter {
                parameter,
                value,
                expected,
            } => format!(
                "Invalid {} '{}': expected one of {}",
                parameter, value, expected
            ),
            AnalyticsError::MalformedAnswer {
                question_id,
                response_id,
                reason,
            } => format!(
                "Malformed answer to question {} in response {}: {}",
                question_id, response_id, reason
            ),
            AnalyticsError::AnalyzerFailed {
                question_id,
                reason,
            } => format!("Analysis of question {} failed: {}", question_id, reason),
        }
    }
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AnalyticsError {}

impl From<AnalyticsError> for DomainError {
    fn from(err: AnalyticsError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            AnalyticsError::InvalidParameter { parameter, value, .. } => domain
                .with_detail("parameter", parameter)
                .with_detail("value", value),
            AnalyticsError::MalformedAnswer {
                question_id,
                response_id,
                ..
            } => domain
                .with_detail("question_id", question_id.to_string())
                .with_detail("response_id", response_id.to_string()),
            AnalyticsError::AnalyzerFailed { question_id, .. } => {
                domain.with_detail("question_id", question_id.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_lists_accepted_values() {
        let err = AnalyticsError::invalid_parameter("timeRange", "decade", &["day", "week"]);
        assert_eq!(err.code(), ErrorCode::InvalidParameter);
        assert_eq!(
            err.to_string(),
            "Invalid timeRange 'decade': expected one of day, week"
        );
    }

    #[test]
    fn converts_into_domain_error_with_details() {
        let err = AnalyticsError::invalid_parameter("groupBy", "team", &["group", "location"]);
        let domain: DomainError = err.into();

        assert_eq!(domain.code, ErrorCode::InvalidParameter);
        assert_eq!(domain.details.get("parameter"), Some(&"groupBy".to_string()));
        assert_eq!(domain.details.get("value"), Some(&"team".to_string()));
    }

    #[test]
    fn analyzer_failure_is_internal() {
        let question_id = QuestionId::new();
        let err = AnalyticsError::analyzer_failed(question_id, "boom");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.to_string().contains(&question_id.to_string()));
    }

    #[test]
    fn malformed_answer_names_question_and_response() {
        let question_id = QuestionId::new();
        let response_id = ResponseId::new();
        let err = AnalyticsError::malformed_answer(question_id, response_id, "expected a number");

        assert_eq!(err.code(), ErrorCode::MalformedAnswer);
        let message = err.to_string();
        assert!(message.contains(&question_id.to_string()));
        assert!(message.contains(&response_id.to_string()));
    }
}
