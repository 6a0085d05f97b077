//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Analytics is read-only, so only query handlers live here.

pub mod handlers;

pub use handlers::{
    GetSurveyAnalyticsError, GetSurveyAnalyticsHandler, GetSurveyAnalyticsQuery,
    GetSurveyAnalyticsResult,
};
