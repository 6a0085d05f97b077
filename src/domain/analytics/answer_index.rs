//! Answer Index - Groups answers by the question they belong to.

use std::collections::HashMap;

use crate::domain::foundation::QuestionId;
use crate::domain::survey::{Answer, Question};

/// Answers partitioned by question id.
///
/// Each partition keeps the input order of its answers. Looking up a question
/// that received no answers yields an empty slice.
#[derive(Debug, Clone, Default)]
pub struct AnswerIndex<'a> {
    partitions: HashMap<QuestionId, Vec<&'a Answer>>,
    total: usize,
}

impl<'a> AnswerIndex<'a> {
    /// Answers bound to `question_id`, in input order.
    pub fn answers_for(&self, question_id: &QuestionId) -> &[&'a Answer] {
        self.partitions
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of partitions, including pre-seeded empty ones.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Number of answers indexed across all partitions.
    pub fn total_answers(&self) -> usize {
        self.total
    }

    /// Returns true if the question has a partition (possibly empty).
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.partitions.contains_key(question_id)
    }
}

/// Builds [`AnswerIndex`] values.
pub struct AnswerIndexer;

impl AnswerIndexer {
    /// Partitions answers by question id.
    pub fn index<'a, I>(answers: I) -> AnswerIndex<'a>
    where
        I: IntoIterator<Item = &'a Answer>,
    {
        let mut index = AnswerIndex::default();
        for answer in answers {
            index
                .partitions
                .entry(answer.question_id)
                .or_default()
                .push(answer);
            index.total += 1;
        }
        index
    }

    /// Partitions answers, seeding an empty partition for every question so
    /// that each survey question is present even without answers.
    pub fn index_for_questions<'a, I>(questions: &[Question], answers: I) -> AnswerIndex<'a>
    where
        I: IntoIterator<Item = &'a Answer>,
    {
        let mut index = Self::index(answers);
        for question in questions {
            index.partitions.entry(question.id).or_default();
        }
        index
    }
}
