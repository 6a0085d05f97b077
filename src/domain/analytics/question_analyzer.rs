//! Question Analyzer - Per-type statistics over a question's answers.
//!
//! Each question type tag maps to one [`QuestionAnalyzer`] in an
//! [`AnalyzerRegistry`]. Supporting a new type means registering another
//! analyzer; the existing ones are untouched.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::warn;

use super::report::{EmptyStats, QuestionStats, RatingBucket, RatingStats, TextStats};
use super::AnalyticsError;
use crate::domain::survey::{Answer, Question, QuestionType};

/// Computes statistics for one question type.
///
/// Implementations skip answers whose value they cannot read (fail-soft) and
/// reserve `Err` for conditions that should abort the whole report.
pub trait QuestionAnalyzer: Send + Sync {
    fn analyze(
        &self,
        question: &Question,
        answers: &[&Answer],
    ) -> Result<QuestionStats, AnalyticsError>;
}

/// Tracks answers skipped as malformed for one question and reports them once.
struct SkippedAnswers<'q> {
    question: &'q Question,
    count: usize,
    first: Option<AnalyticsError>,
}

impl<'q> SkippedAnswers<'q> {
    fn new(question: &'q Question) -> Self {
        Self {
            question,
            count: 0,
            first: None,
        }
    }

    fn skip(&mut self, answer: &Answer, expected: &str) {
        self.count += 1;
        if self.first.is_none() {
            self.first = Some(AnalyticsError::malformed_answer(
                self.question.id,
                answer.response_id,
                format!("expected {}, got {}", expected, answer.value_kind()),
            ));
        }
    }

    fn report(self) {
        if let Some(first) = self.first {
            warn!(
                question_id = %self.question.id,
                question_type = %self.question.question_type,
                skipped = self.count,
                first = %first,
                "Excluded malformed answers from question statistics"
            );
        }
    }
}

/// Average and distribution of numeric ratings.
pub struct RatingAnalyzer;

impl QuestionAnalyzer for RatingAnalyzer {
    /// # Edge Cases
    /// - No answers: average 0, empty distribution
    /// - Every answer malformed: same as no answers
    fn analyze(
        &self,
        question: &Question,
        answers: &[&Answer],
    ) -> Result<QuestionStats, AnalyticsError> {
        let mut skipped = SkippedAnswers::new(question);
        let mut distribution: BTreeMap<RatingBucket, usize> = BTreeMap::new();
        let mut sum = 0.0;
        let mut count = 0usize;

        for answer in answers {
            match answer.rating_value() {
                Some(value) => {
                    sum += value;
                    count += 1;
                    *distribution.entry(RatingBucket::new(value)).or_insert(0) += 1;
                }
                None => skipped.skip(answer, "a numeric rating"),
            }
        }
        skipped.report();

        if count == 0 {
            return Ok(QuestionStats::Rating(RatingStats::empty()));
        }

        Ok(QuestionStats::Rating(RatingStats {
            average: sum / count as f64,
            distribution,
        }))
    }
}

/// Count per chosen option label.
pub struct MultipleChoiceAnalyzer;

impl QuestionAnalyzer for MultipleChoiceAnalyzer {
    fn analyze(
        &self,
        question: &Question,
        answers: &[&Answer],
    ) -> Result<QuestionStats, AnalyticsError> {
        let mut skipped = SkippedAnswers::new(question);
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();

        for answer in answers {
            match answer.choice_label() {
                Some(label) => *counts.entry(label).or_insert(0) += 1,
                None => skipped.skip(answer, "an option label"),
            }
        }
        skipped.report();

        Ok(QuestionStats::MultipleChoice(counts))
    }
}

/// Free-text answers are counted, never analyzed.
pub struct TextAnalyzer;

impl QuestionAnalyzer for TextAnalyzer {
    fn analyze(
        &self,
        question: &Question,
        answers: &[&Answer],
    ) -> Result<QuestionStats, AnalyticsError> {
        let mut skipped = SkippedAnswers::new(question);
        let mut response_count = 0;

        for answer in answers {
            if answer.is_present() {
                response_count += 1;
            } else {
                skipped.skip(answer, "a value");
            }
        }
        skipped.report();

        Ok(QuestionStats::Text(TextStats { response_count }))
    }
}

/// Fallback for type tags without a registered analyzer.
///
/// Yields empty stats instead of an error so a report survives question types
/// added after this engine was built.
pub struct UnsupportedAnalyzer;

impl QuestionAnalyzer for UnsupportedAnalyzer {
    fn analyze(
        &self,
        _question: &Question,
        _answers: &[&Answer],
    ) -> Result<QuestionStats, AnalyticsError> {
        Ok(QuestionStats::Unsupported(EmptyStats::default()))
    }
}

/// Maps question types to their analyzers.
#[derive(Clone)]
pub struct AnalyzerRegistry {
    analyzers: HashMap<QuestionType, Arc<dyn QuestionAnalyzer>>,
    fallback: Arc<dyn QuestionAnalyzer>,
}

impl AnalyzerRegistry {
    /// Registry with no analyzers; every type falls back to empty stats.
    pub fn empty() -> Self {
        Self {
            analyzers: HashMap::new(),
            fallback: Arc::new(UnsupportedAnalyzer),
        }
    }

    /// Registry with the rating, multiple-choice and text analyzers.
    pub fn with_defaults() -> Self {
        Self::empty()
            .register(QuestionType::Rating, Arc::new(RatingAnalyzer))
            .register(QuestionType::MultipleChoice, Arc::new(MultipleChoiceAnalyzer))
            .register(QuestionType::Text, Arc::new(TextAnalyzer))
    }

    /// Adds or replaces the analyzer for a type tag.
    pub fn register(
        mut self,
        question_type: QuestionType,
        analyzer: Arc<dyn QuestionAnalyzer>,
    ) -> Self {
        self.analyzers.insert(question_type, analyzer);
        self
    }

    /// Returns true if a dedicated analyzer exists for the type.
    pub fn supports(&self, question_type: &QuestionType) -> bool {
        self.analyzers.contains_key(question_type)
    }

    /// Runs the analyzer registered for the question's type.
    pub fn analyze(
        &self,
        question: &Question,
        answers: &[&Answer],
    ) -> Result<QuestionStats, AnalyticsError> {
        self.analyzers
            .get(&question.question_type)
            .unwrap_or(&self.fallback)
            .analyze(question, answers)
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&str> = self.analyzers.keys().map(QuestionType::as_str).collect();
        types.sort_unstable();
        f.debug_struct("AnalyzerRegistry").field("types", &types).finish()
    }
}
