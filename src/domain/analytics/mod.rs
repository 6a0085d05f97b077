//! Analytics Module - Pure aggregation of survey feedback.
//!
//! Turns a survey's questions, responses and answers into per-question
//! statistics. Nothing here performs I/O or keeps state between calls.
//!
//! # Components
//!
//! - `TimeWindowFilter` - Keeps responses inside a day/week/month/year window
//! - `AnswerIndexer` - Partitions answers by question
//! - `AnalyzerRegistry` - Per-type statistics (rating, multiple choice, text)
//! - `CohortBreakdown` - Respondent counts per group or location
//! - `AnalyticsReportBuilder` - Ordered per-question report
//! - `PercentageCalculator` - Count mappings as percentages of their total
//! - `ReportSummary` - Headline figures for dashboards

mod answer_index;
mod cohort;
mod errors;
mod percentage;
mod question_analyzer;
mod report;
mod report_builder;
mod summary;
mod time_window;

pub use answer_index::{AnswerIndex, AnswerIndexer};
pub use cohort::{CohortBreakdown, CohortKey};
pub use errors::AnalyticsError;
pub use percentage::PercentageCalculator;
pub use question_analyzer::{
    AnalyzerRegistry, MultipleChoiceAnalyzer, QuestionAnalyzer, RatingAnalyzer, TextAnalyzer,
    UnsupportedAnalyzer,
};
pub use report::{
    AnalyticsReport, CohortCounts, EmptyStats, QuestionReport, QuestionStats, RatingBucket,
    RatingStats, TextStats,
};
pub use report_builder::{AnalyticsReportBuilder, ReportOptions};
pub use summary::{QuestionShare, ReportSummary};
pub use time_window::{TimeWindow, TimeWindowFilter};
