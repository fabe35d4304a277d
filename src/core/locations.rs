//! Location-list scoring: sorted pairwise distance and similarity.

use std::collections::HashMap;

use super::Level;

/// Total distance between the two columns after sorting each ascending:
/// the sum of `|left[i] - right[i]|` over the sorted pairs.
#[must_use]
pub fn total_distance(left: &[Level], right: &[Level]) -> u64 {
    debug_assert_eq!(left.len(), right.len());

    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum()
}

/// Frequency-weighted similarity: each left value contributes itself times
/// the number of occurrences of that value in the right column.
#[must_use]
pub fn similarity_score(left: &[Level], right: &[Level]) -> i64 {
    let mut counts: HashMap<Level, i64> = HashMap::new();
    for &value in right {
        *counts.entry(value).or_insert(0) += 1;
    }

    left.iter()
        .map(|value| value * counts.get(value).copied().unwrap_or(0))
        .sum()
}
