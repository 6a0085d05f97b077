//! Percentage Calculator - Converts counts into shares of the total.

use std::collections::BTreeMap;

/// Count-to-percentage conversion.
pub struct PercentageCalculator;

impl PercentageCalculator {
    /// Converts each count into its percentage (0-100) of the summed counts.
    ///
    /// # Edge Cases
    /// - Empty input: empty result
    /// - All counts zero: empty result (no division by zero)
    pub fn percentages<'a, K, I>(counts: I) -> BTreeMap<K, f64>
    where
        K: Ord + Clone + 'a,
        I: IntoIterator<Item = (&'a K, &'a usize)>,
    {
        let counts: Vec<(&K, usize)> = counts.into_iter().map(|(k, c)| (k, *c)).collect();
        let total: usize = counts.iter().map(|(_, c)| c).sum();

        if total == 0 {
            return BTreeMap::new();
        }

        counts
            .into_iter()
            .map(|(key, count)| (key.clone(), count as f64 / total as f64 * 100.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, c)| (k.to_string(), *c)).collect()
    }

    #[test]
    fn converts_counts_to_percentages() {
        let input = counts(&[("Yes", 3), ("No", 1)]);

        let result = PercentageCalculator::percentages(&input);

        assert_eq!(result.get("Yes"), Some(&75.0));
        assert_eq!(result.get("No"), Some(&25.0));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let input = counts(&[("a", 1), ("b", 1), ("c", 1)]);

        let total: f64 = PercentageCalculator::percentages(&input).values().sum();

        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let input = counts(&[]);
        assert!(PercentageCalculator::percentages(&input).is_empty());
    }

    #[test]
    fn all_zero_input_gives_empty_output() {
        let input = counts(&[("a", 0), ("b", 0)]);
        assert!(PercentageCalculator::percentages(&input).is_empty());
    }

    #[test]
    fn zero_entries_are_kept_when_total_is_positive() {
        let input = counts(&[("a", 0), ("b", 4)]);

        let result = PercentageCalculator::percentages(&input);

        assert_eq!(result.get("a"), Some(&0.0));
        assert_eq!(result.get("b"), Some(&100.0));
    }
}
