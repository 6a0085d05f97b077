//! Survey data source configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where survey data comes from.
///
/// Without a seed path the service starts with an empty in-memory store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON seed file loaded into the in-memory store at startup
    pub seed_path: Option<String>,
}

impl DataConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.seed_path {
            Some(path) if path.trim().is_empty() => Err(ValidationError::EmptySeedPath),
            _ => Ok(()),
        }
    }
}
