//! Property-based tests for the analytics engine
//!
//! Random surveys are generated with `proptest` and run through the pure
//! aggregation stages to check properties that hold for every input.

use feedback_analytics::domain::analytics::{
    AnalyticsReportBuilder, MultipleChoiceAnalyzer, PercentageCalculator, QuestionAnalyzer,
    RatingAnalyzer, ReportOptions, TimeWindow, TimeWindowFilter,
};
use feedback_analytics::domain::foundation::{QuestionId, ResponseId, Timestamp};
use feedback_analytics::domain::survey::{Answer, Question, QuestionType, Response};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

// 2024-06-15T12:00:00Z
const NOW_SECS: i64 = 1_718_452_800;

fn now() -> Timestamp {
    Timestamp::from_unix_secs(NOW_SECS)
}

fn question(question_type: QuestionType) -> Question {
    Question::new(QuestionId::new(), "Generated question", question_type, 0)
}

fn answers_for(question: &Question, values: Vec<serde_json::Value>) -> Vec<Answer> {
    values
        .into_iter()
        .map(|v| Answer::new(ResponseId::new(), question.id, v))
        .collect()
}

fn window() -> impl Strategy<Value = TimeWindow> {
    prop_oneof![
        Just(TimeWindow::Day),
        Just(TimeWindow::Week),
        Just(TimeWindow::Month),
        Just(TimeWindow::Year),
    ]
}

/// Responses spread over roughly two years before `now`.
fn responses() -> impl Strategy<Value = Vec<Response>> {
    prop::collection::vec(0i64..(2 * 366 * 86_400), 0..40).prop_map(|offsets| {
        offsets
            .into_iter()
            .map(|offset| {
                Response::new(ResponseId::new(), Timestamp::from_unix_secs(NOW_SECS - offset))
            })
            .collect()
    })
}

// ============================================================================
// Property Tests: analyzers
// ============================================================================

proptest! {
    /// Property: Rating average equals the arithmetic mean of the ratings
    #[test]
    fn prop_rating_average_is_mean(ratings in prop::collection::vec(1u8..=5, 1..60)) {
        let q = question(QuestionType::Rating);
        let answers = answers_for(&q, ratings.iter().map(|r| json!(r)).collect());
        let refs: Vec<&Answer> = answers.iter().collect();

        let stats = RatingAnalyzer.analyze(&q, &refs).unwrap();
        let rating = stats.as_rating().unwrap();

        let mean = ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64;
        prop_assert!((rating.average - mean).abs() < 1e-9);
    }

    /// Property: Distribution counts add up to the number of valid ratings
    #[test]
    fn prop_rating_distribution_sums_to_valid_count(
        ratings in prop::collection::vec(1u8..=5, 0..40),
        junk in 0usize..10,
    ) {
        let q = question(QuestionType::Rating);
        let mut values: Vec<_> = ratings.iter().map(|r| json!(r)).collect();
        values.extend((0..junk).map(|_| json!("n/a")));
        let answers = answers_for(&q, values);
        let refs: Vec<&Answer> = answers.iter().collect();

        let stats = RatingAnalyzer.analyze(&q, &refs).unwrap();
        let rating = stats.as_rating().unwrap();

        prop_assert_eq!(rating.counted(), ratings.len());
        prop_assert!(rating.average >= 0.0 && rating.average <= 5.0);
    }

    /// Property: Choice counts add up to the number of answers with a label
    #[test]
    fn prop_choice_counts_sum_to_answer_count(
        labels in prop::collection::vec(prop::sample::select(vec!["Yes", "No", "Maybe"]), 0..50),
    ) {
        let q = question(QuestionType::MultipleChoice);
        let answers = answers_for(&q, labels.iter().map(|l| json!(l)).collect());
        let refs: Vec<&Answer> = answers.iter().collect();

        let stats = MultipleChoiceAnalyzer.analyze(&q, &refs).unwrap();
        let counts = stats.as_choices().unwrap();

        prop_assert_eq!(counts.values().sum::<usize>(), labels.len());
        prop_assert!(counts.values().all(|&c| c > 0));
    }
}

// ============================================================================
// Property Tests: percentages
// ============================================================================

proptest! {
    /// Property: Shares add up to 100, or the result is empty
    #[test]
    fn prop_percentages_sum_to_hundred_or_empty(
        counts in prop::collection::btree_map("[a-e]", 0usize..1000, 0..6),
    ) {
        let shares: BTreeMap<String, f64> = PercentageCalculator::percentages(&counts);

        if counts.values().sum::<usize>() == 0 {
            prop_assert!(shares.is_empty());
        } else {
            let total: f64 = shares.values().sum();
            prop_assert!((total - 100.0).abs() < 1e-6, "total was {}", total);
            prop_assert_eq!(shares.len(), counts.len());
        }
    }
}

// ============================================================================
// Property Tests: time window filter
// ============================================================================

proptest! {
    /// Property: Filtering twice with the same window changes nothing
    #[test]
    fn prop_time_filter_is_idempotent(responses in responses(), window in window()) {
        let once = TimeWindowFilter::filter(&responses, Some(window), now());
        let twice = TimeWindowFilter::filter(once.iter().copied(), Some(window), now());

        prop_assert_eq!(once, twice);
    }

    /// Property: Kept responses are never older than the cutoff and keep input order
    #[test]
    fn prop_time_filter_keeps_recent_in_order(responses in responses(), window in window()) {
        let cutoff = window.cutoff(now());
        let kept = TimeWindowFilter::filter(&responses, Some(window), now());

        prop_assert!(kept.iter().all(|r| !r.created_at.is_before(&cutoff)));

        let expected: Vec<&Response> = responses
            .iter()
            .filter(|r| !r.created_at.is_before(&cutoff))
            .collect();
        prop_assert_eq!(kept, expected);
    }

    /// Property: Without a window every response is kept
    #[test]
    fn prop_no_window_keeps_everything(responses in responses()) {
        let kept = TimeWindowFilter::filter(&responses, None, now());
        prop_assert_eq!(kept.len(), responses.len());
    }
}

// ============================================================================
// Property Tests: report builder
// ============================================================================

proptest! {
    /// Property: Report follows ascending order_index, ties in input order
    #[test]
    fn prop_report_is_sorted_by_order_index(orders in prop::collection::vec(0i32..5, 0..12)) {
        let questions: Vec<Question> = orders
            .iter()
            .enumerate()
            .map(|(i, &order)| {
                Question::new(QuestionId::new(), format!("Q{}", i), QuestionType::Text, order)
            })
            .collect();

        let report = AnalyticsReportBuilder::new()
            .build(&questions, &[], &[], &ReportOptions::default(), now())
            .unwrap();

        let mut expected: Vec<(i32, String)> = questions
            .iter()
            .map(|q| (q.order_index, q.text.clone()))
            .collect();
        expected.sort_by_key(|(order, _)| *order);

        let actual: Vec<String> = report.iter().map(|r| r.question.clone()).collect();
        let expected: Vec<String> = expected.into_iter().map(|(_, text)| text).collect();
        prop_assert_eq!(actual, expected);
    }
}
