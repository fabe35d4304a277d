use proptest::prelude::*;

use levelguard::core::safety::{self, SafetyVerdict};

proptest! {
    #[test]
    fn verdict_is_deterministic(levels in prop::collection::vec(-100i64..100, 0..12)) {
        prop_assert_eq!(
            safety::check_with_dampener(&levels),
            safety::check_with_dampener(&levels)
        );
    }

    #[test]
    fn generated_monotone_reports_are_safe(
        start in -1_000i64..1_000,
        steps in prop::collection::vec(1i64..=3, 0..10),
        descending in any::<bool>(),
    ) {
        let mut levels = vec![start];
        for step in steps {
            let delta = if descending { -step } else { step };
            let next = levels.last().copied().unwrap_or_default() + delta;
            levels.push(next);
        }

        prop_assert!(safety::is_safe(&levels));
        prop_assert_eq!(safety::check_with_dampener(&levels), SafetyVerdict::Safe);
    }

    #[test]
    fn verdicts_are_consistent_with_the_predicate(
        levels in prop::collection::vec(-20i64..20, 0..10),
    ) {
        match safety::check_with_dampener(&levels) {
            SafetyVerdict::Safe => prop_assert!(safety::is_safe(&levels)),
            SafetyVerdict::SafeWithRemoval { index } => {
                prop_assert!(!safety::is_safe(&levels));
                prop_assert!(index < levels.len());
                prop_assert!(safety::is_safe(&safety::without_level(&levels, index)));
                // The dampener scans indices in ascending order, so every
                // lower removal must fail.
                for lower in 0..index {
                    prop_assert!(!safety::is_safe(&safety::without_level(&levels, lower)));
                }
            }
            SafetyVerdict::Unsafe => {
                prop_assert!(!safety::is_safe(&levels));
                for i in 0..levels.len() {
                    prop_assert!(!safety::is_safe(&safety::without_level(&levels, i)));
                }
            }
        }
    }

    #[test]
    fn dampened_reports_are_safe_without_further_removal(
        levels in prop::collection::vec(-20i64..20, 2..10),
    ) {
        if let SafetyVerdict::SafeWithRemoval { index } = safety::check_with_dampener(&levels) {
            let dampened = safety::without_level(&levels, index);
            prop_assert_eq!(safety::check_with_dampener(&dampened), SafetyVerdict::Safe);
        }
    }
}
