//! In-Memory Survey Store Adapter
//!
//! Holds survey data in memory, optionally seeded from a JSON file.
//! Useful for testing and development.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SurveyId;
use crate::ports::{SurveyData, SurveyDataError, SurveyDataReader};

/// Errors raised while loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One survey entry in a seed file.
#[derive(Debug, Deserialize)]
struct SurveySeed {
    id: SurveyId,
    #[serde(flatten)]
    data: SurveyData,
}

/// Seed file layout: `{ "surveys": [ { "id": ..., "questions": [...], ... } ] }`.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    surveys: Vec<SurveySeed>,
}

/// In-memory storage for survey data
#[derive(Debug, Clone, Default)]
pub struct InMemorySurveyStore {
    surveys: Arc<RwLock<HashMap<SurveyId, SurveyData>>>,
}

impl InMemorySurveyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed JSON
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let seed: SeedFile = serde_json::from_str(json)?;
        let surveys = seed
            .surveys
            .into_iter()
            .map(|s| (s.id, s.data))
            .collect::<HashMap<_, _>>();

        tracing::debug!(surveys = surveys.len(), "Loaded survey seed data");

        Ok(Self {
            surveys: Arc::new(RwLock::new(surveys)),
        })
    }

    /// Build a store from a seed JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Insert or replace a survey's data
    pub async fn insert(&self, survey_id: SurveyId, data: SurveyData) {
        self.surveys.write().await.insert(survey_id, data);
    }

    /// Get the number of stored surveys
    pub async fn survey_count(&self) -> usize {
        self.surveys.read().await.len()
    }
}

#[async_trait]
impl SurveyDataReader for InMemorySurveyStore {
    async fn load_survey(&self, survey_id: SurveyId) -> Result<SurveyData, SurveyDataError> {
        self.surveys
            .read()
            .await
            .get(&survey_id)
            .cloned()
            .ok_or(SurveyDataError::SurveyNotFound(survey_id))
    }
}
