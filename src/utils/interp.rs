//! Piecewise-linear interpolation and cumulative sums.

/// One-dimensional linear interpolation over a monotone knot grid.
///
/// For each query point, returns the linear interpolant between the two
/// bracketing knots. Queries left of `xp[0]` return `fp[0]`; queries right
/// of the last knot return the last value. Repeated knot positions are
/// treated as step transitions (the right endpoint wins).
///
/// `xp` must be non-decreasing and the same length as `fp`. Empty knots
/// yield an empty result.
pub fn interp(query: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xp.len(), fp.len());

    if xp.is_empty() {
        return Vec::new();
    }
    if xp.len() == 1 {
        return vec![fp[0]; query.len()];
    }

    let last = xp.len() - 1;
    query
        .iter()
        .map(|&x| {
            if x <= xp[0] {
                return fp[0];
            }
            if x >= xp[last] {
                return fp[last];
            }

            // First knot strictly greater than x; its predecessor brackets x.
            let hi = xp.partition_point(|&p| p <= x);
            let lo = hi - 1;

            let dx = xp[hi] - xp[lo];
            if dx <= 0.0 {
                return fp[hi];
            }
            let frac = (x - xp[lo]) / dx;
            fp[lo] + frac * (fp[hi] - fp[lo])
        })
        .collect()
}

/// Cumulative sum of a slice.
pub fn cumsum(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|&x| {
            total += x;
            total
        })
        .collect()
}

/// The regular integer grid 0, 1, ..., n-1 as floats.
pub fn index_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}
