//! Property-based tests for augmentation transforms.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated multi-channel signals.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sensor_augment::augment::{
    jitter, magnitude_warp, permutation, random_sampling, rotation, scaling, time_warp,
    PermutationConfig,
};
use sensor_augment::core::Signal;
use sensor_augment::curve::CurveConfig;

/// Build a signal from flat row-major values.
fn make_signal(values: &[f64], num_channels: usize) -> Signal {
    let rows: Vec<Vec<f64>> = values
        .chunks(num_channels)
        .map(|chunk| chunk.to_vec())
        .collect();
    Signal::from_rows(&rows).unwrap()
}

/// Strategy for signal values of a (len, channels) shape, avoiding
/// extreme magnitudes that would mask numerical issues.
fn signal_strategy(
    min_len: usize,
    max_len: usize,
    channels: usize,
) -> impl Strategy<Value = Signal> {
    (min_len..max_len).prop_flat_map(move |len| {
        prop::collection::vec(-100.0..100.0_f64, len * channels)
            .prop_map(move |values| make_signal(&values, channels))
    })
}

fn sorted_rows(signal: &Signal) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = signal
        .to_rows()
        .iter()
        .map(|row| row.iter().map(|&x| x.to_bits()).collect())
        .collect();
    rows.sort();
    rows
}

// =============================================================================
// Property: every augmenter preserves the (T, C) shape
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn jitter_preserves_shape(
        signal in signal_strategy(10, 80, 3),
        sigma in 0.0..1.0_f64,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = jitter(&signal, sigma, &mut rng).unwrap();
        prop_assert_eq!(result.shape(), signal.shape());
    }

    #[test]
    fn scaling_preserves_shape(
        signal in signal_strategy(10, 80, 3),
        sigma in 0.0..1.0_f64,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = scaling(&signal, sigma, &mut rng).unwrap();
        prop_assert_eq!(result.shape(), signal.shape());
    }

    #[test]
    fn magnitude_warp_preserves_shape(
        signal in signal_strategy(10, 80, 3),
        sigma in 0.0..1.0_f64,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = magnitude_warp(&signal, &CurveConfig::new(sigma), &mut rng).unwrap();
        prop_assert_eq!(result.shape(), signal.shape());
    }

    #[test]
    fn time_warp_preserves_shape(
        signal in signal_strategy(10, 80, 3),
        sigma in 0.0..1.0_f64,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = time_warp(&signal, &CurveConfig::new(sigma), &mut rng).unwrap();
        prop_assert_eq!(result.shape(), signal.shape());
    }

    #[test]
    fn random_sampling_preserves_shape(
        signal in signal_strategy(10, 80, 3),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let n_samples = signal.num_timesteps() / 2 + 2;
        let result = random_sampling(&signal, n_samples, &mut rng).unwrap();
        prop_assert_eq!(result.shape(), signal.shape());
    }

    #[test]
    fn rotation_preserves_shape(
        signal in signal_strategy(10, 80, 3),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = rotation(&signal, &mut rng).unwrap();
        prop_assert_eq!(result.shape(), signal.shape());
    }
}

// =============================================================================
// Property: sigma = 0 degenerates to the identity
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn jitter_zero_sigma_identity(
        signal in signal_strategy(5, 60, 3),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = jitter(&signal, 0.0, &mut rng).unwrap();
        prop_assert_eq!(result, signal);
    }

    #[test]
    fn scaling_zero_sigma_identity(
        signal in signal_strategy(5, 60, 3),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = scaling(&signal, 0.0, &mut rng).unwrap();
        prop_assert_eq!(result, signal);
    }
}

// =============================================================================
// Property: permutation is a pure row reordering of length T
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn permutation_is_row_multiset_preserving(
        signal in signal_strategy(30, 120, 3),
        n_segments in 1usize..4,
        seed in any::<u64>()
    ) {
        let config = PermutationConfig::new(n_segments).with_min_segment_len(2);
        let mut rng = StdRng::seed_from_u64(seed);
        let result = permutation(&signal, &config, &mut rng).unwrap();

        prop_assert_eq!(result.num_timesteps(), signal.num_timesteps());
        prop_assert_eq!(sorted_rows(&result), sorted_rows(&signal));
    }
}

// =============================================================================
// Property: random sampling fixes the first and last rows
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn random_sampling_fixes_endpoints(
        signal in signal_strategy(10, 100, 3),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let n_samples = (signal.num_timesteps() / 3).max(2);
        let result = random_sampling(&signal, n_samples, &mut rng).unwrap();

        let last = signal.num_timesteps() - 1;
        prop_assert_eq!(result.row(0), signal.row(0));
        prop_assert_eq!(result.row(last), signal.row(last));
    }
}

// =============================================================================
// Property: rotation preserves per-row Euclidean norms
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn rotation_preserves_row_norms(
        signal in signal_strategy(5, 60, 3),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = rotation(&signal, &mut rng).unwrap();

        for t in 0..signal.num_timesteps() {
            let before: f64 = signal.row(t).iter().map(|x| x * x).sum::<f64>().sqrt();
            let after: f64 = result.row(t).iter().map(|x| x * x).sum::<f64>().sqrt();
            prop_assert!((before - after).abs() < 1e-8 * (1.0 + before));
        }
    }
}

// =============================================================================
// Property: a fixed seed makes every transform deterministic
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn transforms_are_deterministic_under_seed(
        signal in signal_strategy(20, 80, 3),
        seed in any::<u64>()
    ) {
        let config = CurveConfig::default();
        let n_samples = signal.num_timesteps() / 2 + 2;

        let mut rng1 = StdRng::seed_from_u64(seed);
        let mut rng2 = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            time_warp(&signal, &config, &mut rng1).unwrap(),
            time_warp(&signal, &config, &mut rng2).unwrap()
        );

        let mut rng1 = StdRng::seed_from_u64(seed);
        let mut rng2 = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            random_sampling(&signal, n_samples, &mut rng1).unwrap(),
            random_sampling(&signal, n_samples, &mut rng2).unwrap()
        );

        let mut rng1 = StdRng::seed_from_u64(seed);
        let mut rng2 = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            jitter(&signal, 0.1, &mut rng1).unwrap(),
            jitter(&signal, 0.1, &mut rng2).unwrap()
        );
    }
}
