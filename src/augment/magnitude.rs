//! Magnitude-domain augmentations: jitter, scaling, magnitude warp.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::core::Signal;
use crate::curve::{random_curves, CurveConfig};
use crate::error::{AugmentError, Result};

fn validate_sigma(sigma: f64) -> Result<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(AugmentError::InvalidParameter(
            "sigma must be non-negative".to_string(),
        ));
    }
    Ok(())
}

/// Add elementwise Gaussian noise N(0, sigma) to every sample.
///
/// With `sigma == 0` the output equals the input exactly.
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sensor_augment::augment::jitter;
/// use sensor_augment::core::Signal;
///
/// let signal = Signal::zeros(100, 3).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let noisy = jitter(&signal, 0.05, &mut rng).unwrap();
/// assert_eq!(noisy.shape(), signal.shape());
/// ```
pub fn jitter(signal: &Signal, sigma: f64, rng: &mut impl Rng) -> Result<Signal> {
    validate_sigma(sigma)?;

    let noise = Normal::new(0.0, sigma)
        .map_err(|e| AugmentError::InvalidParameter(format!("invalid noise distribution: {e}")))?;

    let channels = signal
        .channels()
        .iter()
        .map(|channel| {
            channel
                .iter()
                .map(|&x| x + noise.sample(&mut *rng))
                .collect()
        })
        .collect();

    Signal::from_channels(channels)
}

/// Scale each channel by a single random factor from Normal(1.0, sigma).
///
/// Every timestep of a channel is scaled identically; channels draw their
/// factors independently.
pub fn scaling(signal: &Signal, sigma: f64, rng: &mut impl Rng) -> Result<Signal> {
    validate_sigma(sigma)?;

    let factor_dist = Normal::new(1.0, sigma)
        .map_err(|e| AugmentError::InvalidParameter(format!("invalid scale distribution: {e}")))?;

    let channels = signal
        .channels()
        .iter()
        .map(|channel| {
            let factor = factor_dist.sample(&mut *rng);
            channel.iter().map(|&x| x * factor).collect()
        })
        .collect();

    Signal::from_channels(channels)
}

/// Multiply the signal elementwise by a smooth random curve.
///
/// Each channel gets its own curve (see [`random_curves`]), producing a
/// slowly varying amplitude distortion per timestep and channel.
pub fn magnitude_warp(signal: &Signal, config: &CurveConfig, rng: &mut impl Rng) -> Result<Signal> {
    let (num_timesteps, num_channels) = signal.shape();
    let curves = random_curves(num_timesteps, num_channels, config, rng)?;

    let channels = signal
        .channels()
        .iter()
        .zip(curves.iter())
        .map(|(channel, curve)| {
            channel
                .iter()
                .zip(curve.iter())
                .map(|(&x, &w)| x * w)
                .collect()
        })
        .collect();

    Signal::from_channels(channels)
}
