//! HTTP handlers for analytics endpoints.
//!
//! These handlers connect Axum routes to the application layer query handler.
//! Authentication and role checks happen upstream of this adapter.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

use crate::application::handlers::{
    GetSurveyAnalyticsError, GetSurveyAnalyticsHandler, GetSurveyAnalyticsQuery,
};
use crate::domain::analytics::{AnalyticsError, AnalyticsReportBuilder};
use crate::domain::foundation::SurveyId;
use crate::ports::{SurveyDataError, SurveyDataReader};

use super::dto::{ErrorResponse, QuestionReport, ReportSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analytics API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalyticsApiError {
    BadRequest(String),
    InvalidParameter {
        message: String,
        parameter: String,
        value: String,
    },
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AnalyticsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalyticsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalyticsApiError::InvalidParameter {
                message,
                parameter,
                value,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::invalid_parameter(
                    message,
                    json!({ "parameter": parameter, "value": value }),
                ),
            ),
            AnalyticsApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Survey", &id))
            }
            AnalyticsApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<GetSurveyAnalyticsError> for AnalyticsApiError {
    fn from(error: GetSurveyAnalyticsError) -> Self {
        match error {
            GetSurveyAnalyticsError::Analytics(err) => {
                let message = err.message();
                match err {
                    AnalyticsError::InvalidParameter {
                        parameter, value, ..
                    } => AnalyticsApiError::InvalidParameter {
                        message,
                        parameter,
                        value,
                    },
                    other => {
                        tracing::error!(error = %other, "Analytics computation failed");
                        AnalyticsApiError::Internal(message)
                    }
                }
            }
            GetSurveyAnalyticsError::Data(SurveyDataError::SurveyNotFound(id)) => {
                AnalyticsApiError::NotFound(id.to_string())
            }
            GetSurveyAnalyticsError::Data(SurveyDataError::Storage(msg)) => {
                tracing::error!(error = %msg, "Survey data could not be loaded");
                AnalyticsApiError::Internal(format!("Storage error: {}", msg))
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analytics dependencies.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub survey_reader: Arc<dyn SurveyDataReader>,
    pub report_builder: AnalyticsReportBuilder,
}

impl AnalyticsAppState {
    pub fn new(survey_reader: Arc<dyn SurveyDataReader>) -> Self {
        Self {
            survey_reader,
            report_builder: AnalyticsReportBuilder::new(),
        }
    }

    pub fn analytics_handler(&self) -> GetSurveyAnalyticsHandler {
        GetSurveyAnalyticsHandler::new(self.survey_reader.clone())
            .with_builder(self.report_builder.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters shared by the analytics endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsParams {
    pub survey_id: Option<String>,
    /// Optional: group, location
    pub group_by: Option<String>,
    /// Optional: day, week, month, year
    pub time_range: Option<String>,
}

impl AnalyticsParams {
    fn into_query(self) -> Result<GetSurveyAnalyticsQuery, AnalyticsApiError> {
        let raw_id = self
            .survey_id
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AnalyticsApiError::BadRequest("Survey ID required".to_string()))?;

        let survey_id: SurveyId = raw_id
            .trim()
            .parse()
            .map_err(|_| AnalyticsApiError::BadRequest("Invalid survey ID format".to_string()))?;

        Ok(GetSurveyAnalyticsQuery {
            survey_id,
            group_by: self.group_by,
            time_range: self.time_range,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/feedback/analytics
///
/// Returns the per-question report for a survey.
pub async fn get_survey_analytics(
    State(state): State<AnalyticsAppState>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<Vec<QuestionReport>>, AnalyticsApiError> {
    let query = params.into_query()?;

    let handler = state.analytics_handler();
    let report = handler.handle(query).await?;

    Ok(Json(report))
}

/// GET /api/feedback/analytics/summary
///
/// Returns headline figures for a survey's report.
pub async fn get_survey_analytics_summary(
    State(state): State<AnalyticsAppState>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<ReportSummary>, AnalyticsApiError> {
    let query = params.into_query()?;

    let handler = state.analytics_handler();
    let summary = handler.handle_summary(query).await?;

    Ok(Json(summary))
}
