//! In-memory adapters.

mod in_memory_survey_store;

pub use in_memory_survey_store::{InMemorySurveyStore, SeedError};
