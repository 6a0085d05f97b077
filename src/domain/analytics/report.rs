//! Report view models returned by the analytics engine.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::CohortId;
use crate::domain::survey::QuestionType;

/// A distinct rating value used as a distribution key.
///
/// Ordered numerically and serialized as a string key (`4` → `"4"`,
/// `4.5` → `"4.5"`).
#[derive(Debug, Clone, Copy)]
pub struct RatingBucket(f64);

impl RatingBucket {
    pub fn new(value: f64) -> Self {
        // Collapse -0.0 so it shares a bucket with 0.
        Self(if value == 0.0 { 0.0 } else { value })
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for RatingBucket {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RatingBucket {}

impl PartialOrd for RatingBucket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RatingBucket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for RatingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RatingBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Statistics for a rating question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingStats {
    pub average: f64,
    pub distribution: BTreeMap<RatingBucket, usize>,
}

impl RatingStats {
    /// Stats for a question nobody rated: average 0, empty distribution.
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            distribution: BTreeMap::new(),
        }
    }

    /// Number of ratings that made it into the distribution.
    pub fn counted(&self) -> usize {
        self.distribution.values().sum()
    }
}

/// Statistics for a text question. Content is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub response_count: usize,
}

/// Statistics for a question type without an analyzer. Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyStats {}

/// Per-type statistics attached to a question report.
///
/// Serialized without a tag; the report's `type` field tells consumers which
/// shape to expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionStats {
    Rating(RatingStats),
    MultipleChoice(BTreeMap<String, usize>),
    Text(TextStats),
    Unsupported(EmptyStats),
}

impl QuestionStats {
    pub fn as_rating(&self) -> Option<&RatingStats> {
        match self {
            QuestionStats::Rating(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&BTreeMap<String, usize>> {
        match self {
            QuestionStats::MultipleChoice(counts) => Some(counts),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextStats> {
        match self {
            QuestionStats::Text(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, QuestionStats::Unsupported(_))
    }

    /// Count mapping suitable for charting, keyed by display label.
    ///
    /// Ratings use their distribution, multiple choice its option counts;
    /// other types have none.
    pub fn chart_counts(&self) -> Option<BTreeMap<String, usize>> {
        match self {
            QuestionStats::Rating(stats) => Some(
                stats
                    .distribution
                    .iter()
                    .map(|(bucket, count)| (bucket.to_string(), *count))
                    .collect(),
            ),
            QuestionStats::MultipleChoice(counts) => Some(counts.clone()),
            QuestionStats::Text(_) | QuestionStats::Unsupported(_) => None,
        }
    }
}

/// Respondent counts per cohort.
pub type CohortCounts = BTreeMap<CohortId, usize>;

/// Aggregated results for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    /// Question text as shown to respondents.
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Answers bound to this question after filtering, malformed ones included.
    pub total_responses: usize,
    pub analytics: QuestionStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CohortCounts>,
}

/// The ordered per-question results for one survey.
pub type AnalyticsReport = Vec<QuestionReport>;
