//! Survey question definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// Kind of answer a question collects.
///
/// Type tags this crate does not know are kept verbatim in `Other` so that a
/// report can still echo them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    Rating,
    MultipleChoice,
    Text,
    Other(String),
}

impl QuestionType {
    /// Returns the wire tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Rating => "rating",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Text => "text",
            QuestionType::Other(tag) => tag,
        }
    }

    /// Returns true for the types this crate ships an analyzer for.
    pub fn is_known(&self) -> bool {
        !matches!(self, QuestionType::Other(_))
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "rating" => QuestionType::Rating,
            "multiple_choice" => QuestionType::MultipleChoice,
            "text" => QuestionType::Text,
            _ => QuestionType::Other(tag),
        }
    }
}

impl From<&str> for QuestionType {
    fn from(tag: &str) -> Self {
        QuestionType::from(tag.to_string())
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A question as defined on a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub order_index: i32,
}

impl Question {
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        question_type: QuestionType,
        order_index: i32,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            question_type,
            order_index,
        }
    }
}
