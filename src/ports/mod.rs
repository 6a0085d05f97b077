//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `SurveyDataReader` - Loads a survey's questions, responses and answers

mod survey_data_reader;

pub use survey_data_reader::{SurveyData, SurveyDataError, SurveyDataReader};
