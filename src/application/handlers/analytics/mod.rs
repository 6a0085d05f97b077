//! Analytics query handlers.
//!
//! Read-only handlers that turn stored feedback into reports.

mod get_survey_analytics;

pub use get_survey_analytics::{
    GetSurveyAnalyticsError, GetSurveyAnalyticsHandler, GetSurveyAnalyticsQuery,
    GetSurveyAnalyticsResult,
};
