use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SurveyId;
use crate::domain::survey::{Answer, Question, Response};

/// Everything analytics needs about one survey, already loaded and
/// permission-checked by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyData {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl SurveyData {
    pub fn new(questions: Vec<Question>, responses: Vec<Response>, answers: Vec<Answer>) -> Self {
        Self {
            questions,
            responses,
            answers,
        }
    }
}

/// Read-only port for survey feedback data
#[async_trait]
pub trait SurveyDataReader: Send + Sync {
    /// Loads questions, responses and answers of a survey
    async fn load_survey(&self, survey_id: SurveyId) -> Result<SurveyData, SurveyDataError>;
}

/// Errors that can occur while loading survey data
#[derive(Debug, thiserror::Error)]
pub enum SurveyDataError {
    #[error("Survey not found: {0}")]
    SurveyNotFound(SurveyId),

    #[error("Storage error: {0}")]
    Storage(String),
}
