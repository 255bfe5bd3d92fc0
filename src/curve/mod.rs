//! Smooth random curve synthesis.
//!
//! Warping transforms distort a signal with a smooth per-channel random
//! curve: a cubic spline through evenly spaced knots whose values are drawn
//! from a Gaussian centered at 1.0.

pub mod generator;
pub mod spline;

pub use generator::{random_curves, CurveConfig};
pub use spline::CubicSpline;
