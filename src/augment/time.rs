//! Time-domain augmentations: time warp, random sampling, permutation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::Signal;
use crate::curve::{random_curves, CurveConfig};
use crate::error::{AugmentError, Result};
use crate::utils::{cumsum, index_grid, interp};

/// Warp the time axis of a signal with a smooth random distortion.
///
/// A random curve per channel (values around 1.0) is treated as a sequence
/// of time intervals; its cumulative sum forms a distorted time axis, which
/// is rescaled so the last position lands on `T - 1`. The original samples
/// are then interpolated from the distorted axis back onto the regular
/// integer grid, locally stretching and compressing the signal in time.
///
/// Curve intervals are clamped at zero so the distorted axis is always
/// non-decreasing, which keeps the interpolation well-defined even for
/// large sigma.
pub fn time_warp(signal: &Signal, config: &CurveConfig, rng: &mut impl Rng) -> Result<Signal> {
    let (num_timesteps, num_channels) = signal.shape();
    let curves = random_curves(num_timesteps, num_channels, config, rng)?;
    let grid = index_grid(num_timesteps);

    let mut channels = Vec::with_capacity(num_channels);
    for (channel, curve) in signal.channels().iter().zip(curves.iter()) {
        let intervals: Vec<f64> = curve.iter().map(|&w| w.max(0.0)).collect();
        let mut axis = cumsum(&intervals);

        let total = axis[num_timesteps - 1];
        if total <= 0.0 {
            return Err(AugmentError::Computation(
                "distorted time axis collapsed to zero length".to_string(),
            ));
        }

        let scale = (num_timesteps - 1) as f64 / total;
        for position in &mut axis {
            *position *= scale;
        }

        channels.push(interp(&grid, &axis, channel));
    }

    Signal::from_channels(channels)
}

/// Reconstruct the signal from a sparse random sample of its timesteps.
///
/// Per channel, `n_samples - 2` interior anchor timesteps are drawn
/// uniformly from `[1, T - 1)` and sorted; anchors `0` and `T - 1` are
/// always included, so the first and last rows survive unchanged. The full
/// grid is then rebuilt by linear interpolation between the anchors,
/// introducing a controlled resampling artifact.
///
/// # Errors
/// `InvalidParameter` when `n_samples < 2` or `n_samples > T`.
pub fn random_sampling(signal: &Signal, n_samples: usize, rng: &mut impl Rng) -> Result<Signal> {
    let (num_timesteps, _) = signal.shape();
    if n_samples < 2 {
        return Err(AugmentError::InvalidParameter(
            "n_samples must be at least 2".to_string(),
        ));
    }
    if n_samples > num_timesteps {
        return Err(AugmentError::InvalidParameter(format!(
            "n_samples ({}) exceeds signal length ({})",
            n_samples, num_timesteps
        )));
    }

    let grid = index_grid(num_timesteps);
    let mut channels = Vec::with_capacity(signal.num_channels());
    for channel in signal.channels() {
        let anchors = sample_anchor_timesteps(num_timesteps, n_samples, rng);
        let positions: Vec<f64> = anchors.iter().map(|&a| a as f64).collect();
        let values: Vec<f64> = anchors.iter().map(|&a| channel[a]).collect();
        channels.push(interp(&grid, &positions, &values));
    }

    Signal::from_channels(channels)
}

/// Sorted anchor timesteps: 0, random interior points, T - 1.
///
/// Interior anchors may repeat; interpolation treats duplicates as step
/// transitions.
fn sample_anchor_timesteps(
    num_timesteps: usize,
    n_samples: usize,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let mut anchors = Vec::with_capacity(n_samples);
    anchors.push(0);

    let mut interior: Vec<usize> = (0..n_samples.saturating_sub(2))
        .map(|_| rng.gen_range(1..num_timesteps - 1))
        .collect();
    interior.sort_unstable();
    anchors.extend(interior);

    anchors.push(num_timesteps - 1);
    anchors
}

/// Configuration for segment permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationConfig {
    /// Number of contiguous segments to permute.
    pub n_segments: usize,
    /// Every segment must be strictly longer than this.
    pub min_segment_len: usize,
    /// Retry budget for the segment-boundary rejection sampling.
    pub max_attempts: usize,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self {
            n_segments: 4,
            min_segment_len: 10,
            max_attempts: 1000,
        }
    }
}

impl PermutationConfig {
    /// Create a config with the given segment count and default bounds.
    pub fn new(n_segments: usize) -> Self {
        Self {
            n_segments,
            ..Default::default()
        }
    }

    /// Set the minimum segment length.
    pub fn with_min_segment_len(mut self, min_segment_len: usize) -> Self {
        self.min_segment_len = min_segment_len;
        self
    }

    /// Set the rejection-sampling retry budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn validate(&self, num_timesteps: usize) -> Result<()> {
        if self.n_segments == 0 {
            return Err(AugmentError::InvalidParameter(
                "n_segments must be positive".to_string(),
            ));
        }
        if self.min_segment_len == 0 {
            return Err(AugmentError::InvalidParameter(
                "min_segment_len must be positive".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(AugmentError::InvalidParameter(
                "max_attempts must be positive".to_string(),
            ));
        }
        // Each of the n_segments segments needs min_segment_len + 1 rows.
        let needed = self.n_segments * (self.min_segment_len + 1);
        if num_timesteps < needed {
            return Err(AugmentError::InvalidParameter(format!(
                "signal of length {} cannot hold {} segments longer than {}",
                num_timesteps, self.n_segments, self.min_segment_len
            )));
        }
        Ok(())
    }
}

/// Reorder randomly sized contiguous segments of the signal.
///
/// The time axis is cut into `n_segments` contiguous segments, each
/// strictly longer than `min_segment_len`, and the segments are
/// concatenated in a random order. Row order inside each segment is
/// preserved, so the output is a pure reordering of the input rows and
/// always has length `T`.
///
/// Cut points are rejection-sampled; if no admissible cut set is found
/// within `max_attempts` tries the call fails with `NonConvergence`
/// instead of looping forever.
pub fn permutation(
    signal: &Signal,
    config: &PermutationConfig,
    rng: &mut impl Rng,
) -> Result<Signal> {
    let (num_timesteps, _) = signal.shape();
    config.validate(num_timesteps)?;

    let mut order: Vec<usize> = (0..config.n_segments).collect();
    order.shuffle(rng);

    let boundaries = sample_segment_boundaries(num_timesteps, config, rng)?;

    let channels = signal
        .channels()
        .iter()
        .map(|channel| {
            let mut permuted = Vec::with_capacity(num_timesteps);
            for &segment in &order {
                permuted.extend_from_slice(&channel[boundaries[segment]..boundaries[segment + 1]]);
            }
            permuted
        })
        .collect();

    Signal::from_channels(channels)
}

/// Rejection-sample sorted segment boundaries 0 = b_0 < ... < b_n = T with
/// every segment strictly longer than the configured minimum.
fn sample_segment_boundaries(
    num_timesteps: usize,
    config: &PermutationConfig,
    rng: &mut impl Rng,
) -> Result<Vec<usize>> {
    if config.n_segments == 1 {
        return Ok(vec![0, num_timesteps]);
    }

    let low = config.min_segment_len;
    let high = num_timesteps - config.min_segment_len;

    for _ in 0..config.max_attempts {
        let mut boundaries = Vec::with_capacity(config.n_segments + 1);
        boundaries.push(0);

        let mut cuts: Vec<usize> = (0..config.n_segments - 1)
            .map(|_| rng.gen_range(low..high))
            .collect();
        cuts.sort_unstable();
        boundaries.extend(cuts);
        boundaries.push(num_timesteps);

        if boundaries
            .windows(2)
            .all(|pair| pair[1] - pair[0] > config.min_segment_len)
        {
            return Ok(boundaries);
        }
    }

    Err(AugmentError::NonConvergence {
        attempts: config.max_attempts,
    })
}
