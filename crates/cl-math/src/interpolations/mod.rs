//! 1D interpolation anchored at an initial point.
//!
//! Market curves are quoted on nodes `x_1 < … < x_n` that all lie strictly
//! after the curve's initial abscissa `x_0`.  The value at `x_0` is not a
//! market quote but is supplied by the caller (an initial short rate, a zero
//! log-discount, a carry rate), so every scheme here takes the anchor
//! `(x_0, y_0)` separately from the node series.
//!
//! For a query `x` the bracket is located with a "first not less than"
//! search: `i` is the smallest index with `x_i >= x`; the left end is the
//! anchor when `i = 0` and node `i − 1` otherwise.

use cl_core::{errors::Result, Error, Real};
use std::sync::Arc;

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    ///
    /// Outside `[x_min, x_max]` the end segments are extended linearly;
    /// callers are expected to check the domain first.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Index of the first element of `xs` that is not less than `x`.
///
/// Equals `xs.len()` when every element is less than `x`.
///
/// # Example
/// ```
/// use cl_math::first_not_less;
/// let xs = [1.0, 2.0, 3.0];
/// assert_eq!(first_not_less(&xs, 0.5), 0);
/// assert_eq!(first_not_less(&xs, 2.0), 1);
/// assert_eq!(first_not_less(&xs, 2.5), 2);
/// assert_eq!(first_not_less(&xs, 4.0), 3);
/// ```
#[inline]
pub fn first_not_less(xs: &[Real], x: Real) -> usize {
    xs.partition_point(|&v| v < x)
}

/// Check that `xs` is a usable node series for an interpolation anchored at
/// `x0`: non-empty, finite, strictly increasing, with `xs[0] > x0`.
///
/// # Errors
/// Returns [`MalformedSeries`](cl_core::Error::MalformedSeries) describing the
/// first violation found.
pub fn check_abscissae(x0: Real, xs: &[Real]) -> Result<()> {
    cl_core::ensure!(!xs.is_empty(), MalformedSeries, "need at least 1 node");
    cl_core::ensure!(
        xs.iter().all(|x| x.is_finite()),
        MalformedSeries,
        "nodes must be finite"
    );
    cl_core::ensure!(
        xs[0] > x0,
        MalformedSeries,
        "first node {} must lie after the initial point {x0}",
        xs[0]
    );
    if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
        return Err(Error::MalformedSeries(format!(
            "nodes must be strictly increasing, found {} followed by {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation anchored at `(x0, y0)`.
///
/// `f(x) = y_l + (x − x_l) · (y_r − y_l) / (x_r − x_l)` where `(x_l, y_l)` is
/// the anchor on the first segment and the previous node elsewhere.
///
/// Nodes and values are held behind `Arc` so curves built on the same
/// market series share one allocation.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    x0: Real,
    y0: Real,
    xs: Arc<[Real]>,
    ys: Arc<[Real]>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation through `(x0, y0)` and the nodes
    /// `(xs[i], ys[i])`.
    ///
    /// # Errors
    /// Returns [`MalformedSeries`](cl_core::Error::MalformedSeries) if the
    /// slices differ in length or `xs` fails [`check_abscissae`].
    pub fn new(x0: Real, y0: Real, xs: Arc<[Real]>, ys: Arc<[Real]>) -> Result<Self> {
        cl_core::ensure!(
            xs.len() == ys.len(),
            MalformedSeries,
            "xs and ys must have the same length, got {} and {}",
            xs.len(),
            ys.len()
        );
        check_abscissae(x0, &xs)?;
        Ok(Self { x0, y0, xs, ys })
    }

    /// Left and right ends of the segment containing `x`, as
    /// `((x_l, y_l), (x_r, y_r))`.
    pub fn bracket(&self, x: Real) -> ((Real, Real), (Real, Real)) {
        let i = first_not_less(&self.xs, x).min(self.xs.len() - 1);
        let left = if i == 0 {
            (self.x0, self.y0)
        } else {
            (self.xs[i - 1], self.ys[i - 1])
        };
        (left, (self.xs[i], self.ys[i]))
    }

    /// The anchor `(x0, y0)`.
    pub fn anchor(&self) -> (Real, Real) {
        (self.x0, self.y0)
    }

    /// The interpolation nodes.
    pub fn xs(&self) -> &[Real] {
        &self.xs
    }

    /// The values at the nodes.
    pub fn ys(&self) -> &[Real] {
        &self.ys
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.x0
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn operator(&self, x: Real) -> Real {
        let ((xl, yl), (xr, yr)) = self.bracket(x);
        let w = (x - xl) / (xr - xl);
        yl + w * (yr - yl)
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Log-linear interpolation anchored at `(x0, y0)`.
///
/// Interpolates `ln(y)` linearly and exponentiates the result.  The
/// logarithms are taken once, at construction.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    inner: LinearInterpolation,
}

impl LogLinearInterpolation {
    /// Construct a log-linear interpolation.
    ///
    /// `y0` and all `ys` must be strictly positive.
    pub fn new(x0: Real, y0: Real, xs: Arc<[Real]>, ys: &[Real]) -> Result<Self> {
        cl_core::ensure!(
            y0 > 0.0 && ys.iter().all(|&y| y > 0.0),
            MalformedSeries,
            "all values must be positive for log-linear interpolation"
        );
        let log_ys: Arc<[Real]> = ys.iter().map(|&y| y.ln()).collect();
        Ok(Self {
            inner: LinearInterpolation::new(x0, y0.ln(), xs, log_ys)?,
        })
    }
}

impl Interpolation1D for LogLinearInterpolation {
    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }

    fn operator(&self, x: Real) -> Real {
        self.inner.operator(x).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn arc(v: &[Real]) -> Arc<[Real]> {
        Arc::from(v)
    }

    #[test]
    fn linear_uses_anchor_on_first_segment() {
        let interp =
            LinearInterpolation::new(0.0, 1.0, arc(&[1.0, 2.0]), arc(&[3.0, 5.0])).unwrap();
        assert_abs_diff_eq!(interp.operator(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.operator(0.5), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.operator(1.5), 4.0, epsilon = 1e-15);
    }

    #[test]
    fn linear_exact_at_nodes() {
        let xs = [0.5, 1.0, 2.0, 5.0];
        let ys = [0.1, -0.3, 0.7, 0.2];
        let interp = LinearInterpolation::new(0.0, 0.0, arc(&xs), arc(&ys)).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_abs_diff_eq!(interp.operator(*x), *y, epsilon = 1e-15);
        }
        assert_eq!(interp.x_min(), 0.0);
        assert_eq!(interp.x_max(), 5.0);
        assert!(interp.is_in_range(3.0));
        assert!(!interp.is_in_range(5.5));
    }

    #[test]
    fn bracket_on_node_is_left_closed() {
        let interp =
            LinearInterpolation::new(0.0, 9.0, arc(&[1.0, 2.0, 3.0]), arc(&[1.0, 2.0, 3.0]))
                .unwrap();
        // x equal to a node selects the segment ending at that node
        assert_eq!(interp.bracket(2.0), ((1.0, 1.0), (2.0, 2.0)));
        assert_eq!(interp.bracket(1.0), ((0.0, 9.0), (1.0, 1.0)));
    }

    #[test]
    fn log_linear_interpolation() {
        let e = std::f64::consts::E;
        let interp = LogLinearInterpolation::new(0.0, 1.0, arc(&[1.0]), &[e]).unwrap();
        assert_abs_diff_eq!(interp.operator(0.5), e.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(0.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn log_linear_rejects_non_positive_values() {
        let err = LogLinearInterpolation::new(0.0, 1.0, arc(&[1.0, 2.0]), &[0.9, 0.0]);
        assert!(matches!(err, Err(Error::MalformedSeries(_))));
    }

    #[test]
    fn malformed_nodes_rejected() {
        let bad = |xs: &[Real], ys: &[Real]| {
            matches!(
                LinearInterpolation::new(1.0, 0.0, arc(xs), arc(ys)),
                Err(Error::MalformedSeries(_))
            )
        };
        assert!(bad(&[], &[]));
        assert!(bad(&[2.0, 3.0], &[1.0]));
        assert!(bad(&[1.0, 2.0], &[1.0, 1.0]));
        assert!(bad(&[2.0, 2.0], &[1.0, 1.0]));
        assert!(bad(&[3.0, 2.0], &[1.0, 1.0]));
        assert!(bad(&[2.0, Real::NAN], &[1.0, 1.0]));
    }

    proptest! {
        #[test]
        fn linear_never_overshoots(
            y0 in -1.0_f64..1.0,
            y1 in -1.0_f64..1.0,
            y2 in -1.0_f64..1.0,
            frac in 0.0_f64..1.0,
        ) {
            let interp = LinearInterpolation::new(
                0.0, y0, arc(&[1.0, 3.0]), arc(&[y1, y2])
            ).unwrap();
            let x = 1.0 + 2.0 * frac;
            let v = interp.operator(x);
            prop_assert!(v >= y1.min(y2) - 1e-12 && v <= y1.max(y2) + 1e-12);
        }
    }
}
