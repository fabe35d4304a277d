//! Report safety: the monotonicity predicate and the single-removal dampener.

use serde::{Deserialize, Serialize};

use super::Level;

/// Smallest adjacent step a safe report may take.
pub const MIN_STEP: i64 = 1;
/// Largest adjacent step a safe report may take.
pub const MAX_STEP: i64 = 3;

/// Outcome of judging one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SafetyVerdict {
    /// Safe as written, no dampening needed.
    Safe,
    /// Safe once the level at `index` (zero-based, into the original
    /// report) is removed.
    SafeWithRemoval { index: usize },
    /// No single removal makes the report safe.
    Unsafe,
}

impl SafetyVerdict {
    #[must_use]
    pub const fn is_safe(self) -> bool {
        !matches!(self, Self::Unsafe)
    }

    #[must_use]
    pub const fn removed_index(self) -> Option<usize> {
        match self {
            Self::SafeWithRemoval { index } => Some(index),
            _ => None,
        }
    }
}

/// Whether a report is safe as written: strictly increasing or strictly
/// decreasing, with every adjacent difference in `[MIN_STEP, MAX_STEP]`.
///
/// Reports of length 0 or 1 are trivially safe.
#[must_use]
pub fn is_safe(levels: &[Level]) -> bool {
    if levels.len() < 2 {
        return true;
    }

    let diffs: Vec<i64> = levels.windows(2).map(|w| w[1] - w[0]).collect();

    let all_increasing = diffs.iter().all(|&d| d > 0);
    let all_decreasing = diffs.iter().all(|&d| d < 0);
    if !(all_increasing || all_decreasing) {
        return false;
    }

    diffs.iter().all(|&d| (MIN_STEP..=MAX_STEP).contains(&d.abs()))
}

/// Judge a report with the dampener: if it is not safe as written, try
/// removing each level in ascending index order and accept the first removal
/// that leaves a safe report.
///
/// The lowest qualifying index always wins, even when a later removal would
/// also work; callers rely on this for stable output.
#[must_use]
pub fn check_with_dampener(levels: &[Level]) -> SafetyVerdict {
    if is_safe(levels) {
        return SafetyVerdict::Safe;
    }

    (0..levels.len())
        .find(|&i| is_safe(&without_level(levels, i)))
        .map_or(SafetyVerdict::Unsafe, |index| {
            SafetyVerdict::SafeWithRemoval { index }
        })
}

/// The report with the level at `index` removed.
#[must_use]
pub fn without_level(levels: &[Level], index: usize) -> Vec<Level> {
    let mut shortened = Vec::with_capacity(levels.len().saturating_sub(1));
    shortened.extend_from_slice(&levels[..index]);
    shortened.extend_from_slice(&levels[index + 1..]);
    shortened
}
