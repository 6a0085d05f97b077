//! Analytics Report Builder - Composes filtering, indexing, analysis and
//! cohort breakdown into the ordered per-question report.

use std::collections::HashSet;

use tracing::debug;

use super::answer_index::AnswerIndexer;
use super::cohort::{CohortBreakdown, CohortKey};
use super::question_analyzer::AnalyzerRegistry;
use super::report::{AnalyticsReport, QuestionReport};
use super::time_window::{TimeWindow, TimeWindowFilter};
use super::AnalyticsError;
use crate::domain::foundation::{ResponseId, Timestamp};
use crate::domain::survey::{Answer, Question, Response};

/// Optional request parameters for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub group_by: Option<CohortKey>,
    pub time_window: Option<TimeWindow>,
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grouped_by(mut self, key: CohortKey) -> Self {
        self.group_by = Some(key);
        self
    }

    pub fn within(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Parses raw request values (`groupBy`, `timeRange`).
    ///
    /// Blank values count as absent; anything else unrecognized is an
    /// `InvalidParameter` error.
    pub fn parse(group_by: Option<&str>, time_range: Option<&str>) -> Result<Self, AnalyticsError> {
        Ok(Self {
            group_by: CohortKey::parse_optional(group_by)?,
            time_window: TimeWindow::parse_optional(time_range)?,
        })
    }
}

/// Builds feedback reports.
///
/// Holds only the analyzer registry; every `build` call is independent and
/// leaves its inputs untouched.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsReportBuilder {
    registry: AnalyzerRegistry,
}

impl AnalyticsReportBuilder {
    /// Builder using the default rating, multiple-choice and text analyzers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: AnalyzerRegistry) -> Self {
        Self { registry }
    }

    /// Computes the report for one survey.
    ///
    /// # Algorithm
    /// 1. Keep responses inside the time window (relative to `now`)
    /// 2. Keep answers whose response survived
    /// 3. Index answers by question
    /// 4. Analyze each question in `order_index` order (stable for ties),
    ///    attaching the cohort breakdown when grouping was requested
    ///
    /// # Errors
    /// Any analyzer error fails the whole report; there are no partial reports.
    pub fn build(
        &self,
        questions: &[Question],
        responses: &[Response],
        answers: &[Answer],
        options: &ReportOptions,
        now: Timestamp,
    ) -> Result<AnalyticsReport, AnalyticsError> {
        let kept = TimeWindowFilter::filter(responses, options.time_window, now);
        let kept_ids: HashSet<ResponseId> = kept.iter().map(|r| r.id).collect();

        let surviving: Vec<&Answer> = answers
            .iter()
            .filter(|a| kept_ids.contains(&a.response_id))
            .collect();
        if surviving.len() < answers.len() {
            debug!(
                dropped = answers.len() - surviving.len(),
                "Dropped answers outside the response window"
            );
        }

        let index = AnswerIndexer::index_for_questions(questions, surviving);

        let breakdown = options
            .group_by
            .map(|key| CohortBreakdown::compute(key, kept.iter().copied()));

        let mut ordered: Vec<&Question> = questions.iter().collect();
        ordered.sort_by_key(|q| q.order_index);

        let mut report = Vec::with_capacity(ordered.len());
        for question in ordered {
            let question_answers = index.answers_for(&question.id);
            let analytics = self.registry.analyze(question, question_answers)?;

            report.push(QuestionReport {
                question: question.text.clone(),
                question_type: question.question_type.clone(),
                total_responses: question_answers.len(),
                analytics,
                breakdown: breakdown.clone(),
            });
        }

        debug!(
            questions = report.len(),
            responses = kept.len(),
            answers = index.total_answers(),
            "Built analytics report"
        );

        Ok(report)
    }
}
