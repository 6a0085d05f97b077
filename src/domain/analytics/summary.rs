//! Report summary - Headline figures derived from a finished report.

use serde::Serialize;
use std::collections::BTreeMap;

use super::percentage::PercentageCalculator;
use super::report::QuestionReport;
use crate::domain::survey::QuestionType;

/// Percentage split of one chartable question's answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionShare {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub percentages: BTreeMap<String, f64>,
}

/// Dashboard headline figures for a survey report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Answer count of the first question, 0 when the survey has none.
    pub total_responses: usize,
    pub question_count: usize,
    /// Mean of the rating questions' averages, 0 without rating questions.
    pub average_rating: f64,
    /// Percentage splits for rating and multiple-choice questions.
    pub shares: Vec<QuestionShare>,
}

impl ReportSummary {
    pub fn from_reports(reports: &[QuestionReport]) -> Self {
        let rating_averages: Vec<f64> = reports
            .iter()
            .filter_map(|r| r.analytics.as_rating())
            .map(|stats| stats.average)
            .collect();

        let average_rating = if rating_averages.is_empty() {
            0.0
        } else {
            rating_averages.iter().sum::<f64>() / rating_averages.len() as f64
        };

        let shares = reports
            .iter()
            .filter_map(|r| {
                let counts = r.analytics.chart_counts()?;
                Some(QuestionShare {
                    question: r.question.clone(),
                    question_type: r.question_type.clone(),
                    percentages: PercentageCalculator::percentages(&counts),
                })
            })
            .collect();

        Self {
            total_responses: reports.first().map_or(0, |r| r.total_responses),
            question_count: reports.len(),
            average_rating,
            shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::report::{QuestionStats, RatingBucket, RatingStats, TextStats};

    fn rating_report(average: f64, total: usize) -> QuestionReport {
        let mut distribution = BTreeMap::new();
        if total > 0 {
            distribution.insert(RatingBucket::new(average), total);
        }
        QuestionReport {
            question: "Rate".to_string(),
            question_type: QuestionType::Rating,
            total_responses: total,
            analytics: QuestionStats::Rating(RatingStats {
                average,
                distribution,
            }),
            breakdown: None,
        }
    }

    fn text_report(total: usize) -> QuestionReport {
        QuestionReport {
            question: "Why".to_string(),
            question_type: QuestionType::Text,
            total_responses: total,
            analytics: QuestionStats::Text(TextStats {
                response_count: total,
            }),
            breakdown: None,
        }
    }

    #[test]
    fn empty_report_summarizes_to_zeroes() {
        let summary = ReportSummary::from_reports(&[]);
        assert_eq!(summary.total_responses, 0);
        assert_eq!(summary.question_count, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert!(summary.shares.is_empty());
    }

    #[test]
    fn averages_rating_questions_only() {
        let reports = vec![text_report(7), rating_report(4.0, 3), rating_report(2.0, 5)];

        let summary = ReportSummary::from_reports(&reports);

        assert_eq!(summary.total_responses, 7);
        assert_eq!(summary.question_count, 3);
        assert_eq!(summary.average_rating, 3.0);
    }

    #[test]
    fn shares_cover_chartable_questions() {
        let mut choices = BTreeMap::new();
        choices.insert("Yes".to_string(), 1);
        choices.insert("No".to_string(), 3);
        let choice = QuestionReport {
            question: "Recommend?".to_string(),
            question_type: QuestionType::MultipleChoice,
            total_responses: 4,
            analytics: QuestionStats::MultipleChoice(choices),
            breakdown: None,
        };

        let summary = ReportSummary::from_reports(&[text_report(4), choice]);

        assert_eq!(summary.shares.len(), 1);
        assert_eq!(summary.shares[0].percentages.get("No"), Some(&75.0));
        assert_eq!(summary.shares[0].percentages.get("Yes"), Some(&25.0));
    }

    #[test]
    fn unanswered_rating_has_empty_share() {
        let summary = ReportSummary::from_reports(&[rating_report(0.0, 0)]);
        assert!(summary.shares[0].percentages.is_empty());
    }
}
