//! Random 3D rotation for tri-axial signals.

use std::f64::consts::PI;

use rand::Rng;

use crate::core::Signal;
use crate::error::{AugmentError, Result};

/// A 3x3 rotation matrix.
pub type RotationMatrix = [[f64; 3]; 3];

/// Convert an axis-angle rotation to a 3x3 rotation matrix.
///
/// The axis is normalized internally; `angle` is in radians. Uses the
/// Rodrigues formula, with the same row/column layout as transforms3d's
/// `axangle2mat`.
///
/// # Errors
/// `InvalidParameter` for a near-zero axis, whose rotation is undefined.
pub fn axis_angle_to_matrix(axis: [f64; 3], angle: f64) -> Result<RotationMatrix> {
    let norm = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if !norm.is_finite() || norm < 1e-12 {
        return Err(AugmentError::InvalidParameter(
            "rotation axis must be non-zero".to_string(),
        ));
    }

    let x = axis[0] / norm;
    let y = axis[1] / norm;
    let z = axis[2] / norm;

    let c = angle.cos();
    let s = angle.sin();
    let k = 1.0 - c;

    Ok([
        [k * x * x + c, k * x * y - s * z, k * x * z + s * y],
        [k * x * y + s * z, k * y * y + c, k * y * z - s * x],
        [k * x * z - s * y, k * y * z + s * x, k * z * z + c],
    ])
}

/// Rotate a tri-axial signal by a random 3D rotation.
///
/// Draws an axis with components uniform in [-1, 1] and an angle uniform
/// in [-pi, pi], then right-multiplies each row by the rotation matrix.
/// Row norms are preserved, so the rotated signal models the same motion
/// recorded under a different sensor orientation.
///
/// # Errors
/// `ChannelMismatch` unless the signal has exactly 3 channels.
pub fn rotation(signal: &Signal, rng: &mut impl Rng) -> Result<Signal> {
    let (num_timesteps, num_channels) = signal.shape();
    if num_channels != 3 {
        return Err(AugmentError::ChannelMismatch {
            expected: 3,
            got: num_channels,
        });
    }

    // A zero axis draw has probability zero; redraw rather than error.
    let axis = loop {
        let candidate = [
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ];
        let norm_sq: f64 = candidate.iter().map(|a| a * a).sum();
        if norm_sq > 1e-12 {
            break candidate;
        }
    };
    let angle = rng.gen_range(-PI..PI);
    let matrix = axis_angle_to_matrix(axis, angle)?;

    apply_rotation(signal, &matrix, num_timesteps)
}

/// Right-multiply every row of the signal by `matrix` (X · R).
fn apply_rotation(
    signal: &Signal,
    matrix: &RotationMatrix,
    num_timesteps: usize,
) -> Result<Signal> {
    let mut channels = vec![vec![0.0; num_timesteps]; 3];
    for t in 0..num_timesteps {
        for (j, channel) in channels.iter_mut().enumerate() {
            let mut acc = 0.0;
            for i in 0..3 {
                acc += signal.channel(i)[t] * matrix[i][j];
            }
            channel[t] = acc;
        }
    }
    Signal::from_channels(channels)
}
