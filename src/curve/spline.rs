//! Natural cubic spline interpolation.

use crate::error::{AugmentError, Result};

/// A natural cubic spline through a set of knots.
///
/// Piecewise cubic, continuous in value and first/second derivative, with
/// zero second derivative at both ends. Evaluation outside the knot range
/// extends the boundary segment's polynomial.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at the knots.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through `(xs[i], ys[i])` pairs.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if fewer than two knots are given, the
    /// lengths differ, or `xs` is not strictly increasing.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(AugmentError::InvalidParameter(format!(
                "spline knot positions and values differ in length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(AugmentError::InvalidParameter(
                "spline requires at least two knots".to_string(),
            ));
        }
        for window in xs.windows(2) {
            if !(window[1] > window[0]) {
                return Err(AugmentError::InvalidParameter(
                    "spline knot positions must be strictly increasing".to_string(),
                ));
            }
        }

        let n = xs.len();
        let mut m = vec![0.0; n];

        if n > 2 {
            // Tridiagonal system for interior second derivatives,
            // solved with the Thomas algorithm. Natural boundary:
            // m[0] = m[n-1] = 0.
            let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

            let interior = n - 2;
            let mut diag = vec![0.0; interior];
            let mut rhs = vec![0.0; interior];
            for i in 0..interior {
                diag[i] = 2.0 * (h[i] + h[i + 1]);
                rhs[i] = 6.0
                    * ((ys[i + 2] - ys[i + 1]) / h[i + 1] - (ys[i + 1] - ys[i]) / h[i]);
            }

            // Forward elimination: sub-diagonal h[i], super-diagonal h[i+1].
            for i in 1..interior {
                let factor = h[i] / diag[i - 1];
                diag[i] -= factor * h[i];
                rhs[i] -= factor * rhs[i - 1];
            }

            // Back substitution.
            m[interior] = rhs[interior - 1] / diag[interior - 1];
            for i in (1..interior).rev() {
                m[i] = (rhs[i - 1] - h[i] * m[i + 1]) / diag[i - 1];
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Evaluate the spline at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();

        // Segment whose right knot is the first position >= x,
        // clamped so out-of-range queries use the boundary segment.
        let hi = self.xs.partition_point(|&p| p < x).clamp(1, n - 1);
        let lo = hi - 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.m[lo] + (b * b * b - b) * self.m[hi]) * h * h / 6.0
    }

    /// Evaluate the spline at each point of a slice.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}
