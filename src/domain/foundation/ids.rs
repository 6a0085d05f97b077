//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a survey.
    SurveyId
);

uuid_id!(
    /// Unique identifier for a question within a survey.
    QuestionId
);

uuid_id!(
    /// Unique identifier for one submitted survey response.
    ResponseId
);

/// Identifier of a respondent cohort (an organizational group or a location).
///
/// Cohort ids come from the user directory and are treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CohortId(String);

impl CohortId {
    /// Creates a new CohortId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("cohort_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CohortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_id_generates_unique_values() {
        let id1 = SurveyId::new();
        let id2 = SurveyId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn question_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: QuestionId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn response_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ResponseId>().is_err());
    }

    #[test]
    fn question_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = QuestionId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn cohort_id_accepts_non_empty_string() {
        let id = CohortId::new("north-office").unwrap();
        assert_eq!(id.as_str(), "north-office");
        assert_eq!(format!("{}", id), "north-office");
    }

    #[test]
    fn cohort_id_rejects_blank_string() {
        match CohortId::new("  ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "cohort_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }
}
