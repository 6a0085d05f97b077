//! Answers given to individual questions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{QuestionId, ResponseId};

/// A single answer within a response.
///
/// The value is kept as raw JSON because the store does not type it by
/// question; coercion happens when an analyzer reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub response_id: ResponseId,
    pub question_id: QuestionId,
    #[serde(default)]
    pub value: Value,
}

impl Answer {
    pub fn new(response_id: ResponseId, question_id: QuestionId, value: impl Into<Value>) -> Self {
        Self {
            response_id,
            question_id,
            value: value.into(),
        }
    }

    /// Reads the value as a rating.
    ///
    /// Accepts finite numbers and strings that parse as finite numbers.
    pub fn rating_value(&self) -> Option<f64> {
        let number = match &self.value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        number.is_finite().then_some(number)
    }

    /// Reads the value as a choice label.
    ///
    /// Numbers and booleans are rendered as text; null, arrays and objects
    /// have no label.
    pub fn choice_label(&self) -> Option<String> {
        match &self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Returns true when the answer carries any value at all.
    pub fn is_present(&self) -> bool {
        !self.value.is_null()
    }

    /// Short description of the value's JSON kind, for diagnostics.
    pub fn value_kind(&self) -> &'static str {
        match &self.value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answer(value: Value) -> Answer {
        Answer::new(ResponseId::new(), QuestionId::new(), value)
    }

    #[test]
    fn rating_value_reads_numbers() {
        assert_eq!(answer(json!(4)).rating_value(), Some(4.0));
        assert_eq!(answer(json!(3.5)).rating_value(), Some(3.5));
    }

    #[test]
    fn rating_value_coerces_numeric_strings() {
        assert_eq!(answer(json!("5")).rating_value(), Some(5.0));
        assert_eq!(answer(json!(" 2 ")).rating_value(), Some(2.0));
    }

    #[test]
    fn rating_value_rejects_non_numeric() {
        assert_eq!(answer(json!("great")).rating_value(), None);
        assert_eq!(answer(json!("NaN")).rating_value(), None);
        assert_eq!(answer(Value::Null).rating_value(), None);
        assert_eq!(answer(json!([1, 2])).rating_value(), None);
    }

    #[test]
    fn choice_label_renders_scalars() {
        assert_eq!(answer(json!("Yes")).choice_label(), Some("Yes".to_string()));
        assert_eq!(answer(json!(2)).choice_label(), Some("2".to_string()));
        assert_eq!(answer(json!(true)).choice_label(), Some("true".to_string()));
        assert_eq!(answer(json!({"a": 1})).choice_label(), None);
    }

    #[test]
    fn missing_value_deserializes_as_null() {
        let json = r#"{
            "responseId": "550e8400-e29b-41d4-a716-446655440000",
            "questionId": "550e8400-e29b-41d4-a716-446655440001"
        }"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert!(!answer.is_present());
        assert_eq!(answer.value_kind(), "null");
    }
}
