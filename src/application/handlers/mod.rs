//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod analytics;

pub use analytics::{
    GetSurveyAnalyticsError, GetSurveyAnalyticsHandler, GetSurveyAnalyticsQuery,
    GetSurveyAnalyticsResult,
};
