//! GetSurveyAnalyticsHandler - Query handler for a survey's feedback report.
//!
//! Parses request options, loads the survey through the reader port and runs
//! the analytics engine over it.

use std::sync::Arc;

use tracing::info;

use crate::domain::analytics::{
    AnalyticsError, AnalyticsReport, AnalyticsReportBuilder, ReportOptions, ReportSummary,
};
use crate::domain::foundation::{DomainError, ErrorCode, SurveyId, Timestamp};
use crate::ports::{SurveyDataError, SurveyDataReader};

/// Query for a survey's analytics.
///
/// Options arrive as raw request strings and are validated by the handler.
#[derive(Debug, Clone)]
pub struct GetSurveyAnalyticsQuery {
    pub survey_id: SurveyId,
    /// `group` or `location`.
    pub group_by: Option<String>,
    /// `day`, `week`, `month` or `year`.
    pub time_range: Option<String>,
}

impl GetSurveyAnalyticsQuery {
    pub fn new(survey_id: SurveyId) -> Self {
        Self {
            survey_id,
            group_by: None,
            time_range: None,
        }
    }

    pub fn with_group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    pub fn with_time_range(mut self, time_range: impl Into<String>) -> Self {
        self.time_range = Some(time_range.into());
        self
    }
}

/// Result of a successful analytics query.
pub type GetSurveyAnalyticsResult = AnalyticsReport;

/// Errors from the analytics query.
#[derive(Debug, thiserror::Error)]
pub enum GetSurveyAnalyticsError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Data(#[from] SurveyDataError),
}

impl From<GetSurveyAnalyticsError> for DomainError {
    fn from(err: GetSurveyAnalyticsError) -> Self {
        match err {
            GetSurveyAnalyticsError::Analytics(e) => e.into(),
            GetSurveyAnalyticsError::Data(SurveyDataError::SurveyNotFound(id)) => {
                DomainError::new(ErrorCode::SurveyNotFound, "Survey not found")
                    .with_detail("survey_id", id.to_string())
            }
            GetSurveyAnalyticsError::Data(SurveyDataError::Storage(msg)) => {
                DomainError::new(ErrorCode::StorageError, msg)
            }
        }
    }
}

/// Handler for survey analytics queries.
pub struct GetSurveyAnalyticsHandler {
    reader: Arc<dyn SurveyDataReader>,
    builder: AnalyticsReportBuilder,
    fixed_now: Option<Timestamp>,
}

impl GetSurveyAnalyticsHandler {
    pub fn new(reader: Arc<dyn SurveyDataReader>) -> Self {
        Self {
            reader,
            builder: AnalyticsReportBuilder::new(),
            fixed_now: None,
        }
    }

    /// Uses a custom engine, e.g. one with extra analyzers registered.
    pub fn with_builder(mut self, builder: AnalyticsReportBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Pins the reference time for time windows instead of the wall clock.
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.fixed_now = Some(now);
        self
    }

    pub async fn handle(
        &self,
        query: GetSurveyAnalyticsQuery,
    ) -> Result<GetSurveyAnalyticsResult, GetSurveyAnalyticsError> {
        // Reject bad options before touching storage
        let options = ReportOptions::parse(query.group_by.as_deref(), query.time_range.as_deref())?;

        let data = self.reader.load_survey(query.survey_id).await?;
        let now = self.fixed_now.unwrap_or_else(Timestamp::now);

        let report = self.builder.build(
            &data.questions,
            &data.responses,
            &data.answers,
            &options,
            now,
        )?;

        info!(
            survey_id = %query.survey_id,
            group_by = ?options.group_by,
            time_window = ?options.time_window,
            questions = report.len(),
            responses = data.responses.len(),
            "Computed survey analytics"
        );

        Ok(report)
    }

    /// Runs the same query and condenses it into headline figures.
    pub async fn handle_summary(
        &self,
        query: GetSurveyAnalyticsQuery,
    ) -> Result<ReportSummary, GetSurveyAnalyticsError> {
        let report = self.handle(query).await?;
        Ok(ReportSummary::from_reports(&report))
    }
}
