//! Property-based tests for the changepoint primitives and detector.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use anofox_changepoint::changepoint::{
    bootstrap, changepoint_detect, cusum, ChangepointConfig,
};
use anofox_changepoint::utils::{max, maxdiff, mean, min, minmax, shuffle};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Strategy for generating non-empty series of moderate magnitude.
fn values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, min_len..max_len)
}

/// Strategy for generating series with one level shift at a random position.
fn shifted_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    values_strategy(min_len, max_len).prop_flat_map(|v| {
        let n = v.len();
        (Just(v), 1..n, -100.0..100.0_f64).prop_map(|(mut v, at, shift)| {
            for x in v.iter_mut().skip(at) {
                *x += shift;
            }
            v
        })
    })
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

// =============================================================================
// Property: vector primitives
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn minmax_agrees_with_min_and_max(values in values_strategy(1, 200)) {
        let (lo, hi) = minmax(&values).unwrap();
        prop_assert_eq!(lo, min(&values).unwrap());
        prop_assert_eq!(hi, max(&values).unwrap());
        prop_assert_eq!(maxdiff(&values).unwrap(), hi - lo);
    }

    #[test]
    fn mean_lies_between_extrema(values in values_strategy(1, 200)) {
        let m = mean(&values).unwrap();
        let (lo, hi) = minmax(&values).unwrap();
        prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
    }

    #[test]
    fn shuffle_preserves_multiset(values in values_strategy(0, 100), seed in any::<u64>()) {
        let mut shuffled = values.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        shuffle(&mut shuffled, &mut rng);
        prop_assert_eq!(sorted(&shuffled), sorted(&values));
    }
}

// =============================================================================
// Property: CUSUM sequence shape
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn cusum_starts_and_ends_at_zero(values in values_strategy(1, 200)) {
        let s = cusum(&values).unwrap();
        prop_assert_eq!(s.len(), values.len() + 1);
        prop_assert_eq!(s[0], 0.0);

        let scale: f64 = values.iter().map(|x| x.abs()).sum::<f64>().max(1.0);
        prop_assert!(s[values.len()].abs() <= 1e-9 * scale);
    }
}

// =============================================================================
// Property: bootstrap count and detector output
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn bootstrap_count_within_iterations(
        values in values_strategy(1, 60),
        iterations in 1usize..100,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = bootstrap(&values, iterations, &mut rng).unwrap();
        prop_assert!(count <= iterations);
    }

    #[test]
    fn changepoints_sorted_unique_in_range(
        values in shifted_values_strategy(2, 80),
        confidence in 0.5..1.0_f64,
        seed in any::<u64>()
    ) {
        let config = ChangepointConfig::new(confidence).iterations(50).seed(seed);
        let result = changepoint_detect(&values, &config).unwrap();

        prop_assert!(result.changepoints.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.changepoints.iter().all(|&cp| cp < values.len()));
        prop_assert_eq!(result.n_changepoints, result.changepoints.len());
        prop_assert!(result.iterations_processed >= 1);
    }

    #[test]
    fn detection_is_deterministic_for_a_seed(
        values in values_strategy(1, 50),
        seed in any::<u64>()
    ) {
        let config = ChangepointConfig::new(0.9).iterations(40).seed(seed);
        let a = changepoint_detect(&values, &config).unwrap();
        let b = changepoint_detect(&values, &config).unwrap();
        prop_assert_eq!(a, b);
    }
}
