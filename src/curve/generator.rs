//! Random smooth curve generation for warping transforms.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::curve::CubicSpline;
use crate::error::{AugmentError, Result};
use crate::utils::index_grid;

/// Configuration for random curve generation.
///
/// The curve is a cubic spline through `knots + 2` control points evenly
/// spaced over the time axis, with values drawn from Normal(1.0, sigma).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    /// Standard deviation of the control-point values around 1.0.
    pub sigma: f64,
    /// Number of interior knots (the curve has `knots + 2` control points).
    pub knots: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            sigma: 0.2,
            knots: 4,
        }
    }
}

impl CurveConfig {
    /// Create a config with the given sigma and the default knot count.
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            ..Default::default()
        }
    }

    /// Set the number of interior knots.
    pub fn with_knots(mut self, knots: usize) -> Self {
        self.knots = knots;
        self
    }

    pub(crate) fn validate(&self, num_timesteps: usize) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(AugmentError::InvalidParameter(
                "sigma must be non-negative".to_string(),
            ));
        }
        if self.knots == 0 {
            return Err(AugmentError::InvalidParameter(
                "knot count must be positive".to_string(),
            ));
        }
        let needed = self.knots + 2;
        if num_timesteps < needed {
            return Err(AugmentError::InsufficientTimesteps {
                needed,
                got: num_timesteps,
            });
        }
        Ok(())
    }
}

/// Generate one smooth random curve per channel, evaluated on the integer
/// grid `0..num_timesteps`.
///
/// Control points sit at `j * (T - 1) / (knots + 1)` for
/// `j = 0..=knots + 1`; each channel draws its values independently from
/// Normal(1.0, sigma) and fits its own cubic spline.
///
/// Returns column-major curves: `curves[channel][timestep]`.
pub fn random_curves(
    num_timesteps: usize,
    num_channels: usize,
    config: &CurveConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Vec<f64>>> {
    if num_timesteps == 0 || num_channels == 0 {
        return Err(AugmentError::EmptySignal);
    }
    config.validate(num_timesteps)?;

    let num_points = config.knots + 2;
    let step = (num_timesteps - 1) as f64 / (config.knots + 1) as f64;
    let knot_positions: Vec<f64> = (0..num_points).map(|j| j as f64 * step).collect();

    let normal = Normal::new(1.0, config.sigma)
        .map_err(|e| AugmentError::InvalidParameter(format!("invalid noise distribution: {e}")))?;

    let grid = index_grid(num_timesteps);
    let mut curves = Vec::with_capacity(num_channels);
    for _ in 0..num_channels {
        let knot_values: Vec<f64> = (0..num_points).map(|_| normal.sample(&mut *rng)).collect();
        let spline = CubicSpline::fit(&knot_positions, &knot_values)?;
        curves.push(spline.evaluate_many(&grid));
    }

    Ok(curves)
}
