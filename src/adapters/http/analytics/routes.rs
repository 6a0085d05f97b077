//! HTTP routes for analytics endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_survey_analytics, get_survey_analytics_summary, AnalyticsAppState};

/// Creates the analytics router with all routes.
pub fn analytics_routes(state: AnalyticsAppState) -> Router {
    Router::new()
        // GET /api/feedback/analytics?surveyId=...&groupBy=...&timeRange=...
        .route("/api/feedback/analytics", get(get_survey_analytics))
        // GET /api/feedback/analytics/summary?surveyId=...
        .route("/api/feedback/analytics/summary", get(get_survey_analytics_summary))
        .with_state(state)
}
