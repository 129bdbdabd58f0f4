//! `Curve` — base trait for every curve in the workspace.
//!
//! A curve is an immutable function of time with a domain
//! `[initial_time, max_time]`.  Implementors provide
//! [`value_impl`](Curve::value_impl); callers use [`value`](Curve::value),
//! which rejects times outside the domain before delegating.
//!
//! Curves that depend on other curves hold them as [`SharedCurve`], so a
//! discount curve can feed any number of forward-price curves without being
//! copied.

use cl_core::{check_range, errors::Result, Real, Time};
use std::sync::Arc;

/// Shared, read-only handle to a curve.
pub type SharedCurve = Arc<dyn Curve>;

/// Base trait for all one-argument curves.
pub trait Curve: std::fmt::Debug + Send + Sync {
    /// The time `t0` from which the curve is defined.
    fn initial_time(&self) -> Time;

    /// The latest time for which the curve can be evaluated.
    fn max_time(&self) -> Time {
        Time::INFINITY
    }

    /// Evaluate the curve at `t`, assuming `t` is inside the domain.
    fn value_impl(&self, t: Time) -> Result<Real>;

    /// Check whether `t` lies in `[initial_time, max_time]`.
    fn check_range(&self, t: Time) -> Result<()> {
        check_range("time", t, self.initial_time(), self.max_time())
    }

    /// Evaluate the curve at `t`.
    ///
    /// # Errors
    /// Returns [`OutOfDomain`](cl_core::Error::OutOfDomain) if `t` is before
    /// the initial time or after the maximum time, plus any error reported by
    /// a curve this one depends on.
    fn value(&self, t: Time) -> Result<Real> {
        self.check_range(t)?;
        self.value_impl(t)
    }

    /// Evaluate the curve on an evenly spaced grid starting at `start`.
    ///
    /// The grid has `points + 1` nodes spaced `interval / (points + 0.25)`
    /// apart, so the last node stays strictly inside `start + interval`.  A
    /// zero `interval` yields the single node `start`.
    fn sample(&self, start: Time, interval: Time, points: usize) -> Result<Vec<(Time, Real)>> {
        if interval == 0.0 {
            return Ok(vec![(start, self.value(start)?)]);
        }
        let step = interval / (points as Real + 0.25);
        (0..=points)
            .map(|i| {
                let t = start + i as Real * step;
                Ok((t, self.value(t)?))
            })
            .collect()
    }
}

/// A curve of two arguments, such as a yield as a function of maturity and
/// discount factor, or an implied volatility as a function of option and bond
/// maturities.
pub trait BivariateCurve: std::fmt::Debug + Send + Sync {
    /// Evaluate the curve at `(x, y)`.
    fn value(&self, x: Real, y: Real) -> Result<Real>;
}

// ── FnCurve ───────────────────────────────────────────────────────────────────

/// Adapts a closure `Fn(Time) -> Real` to the [`Curve`] trait.
///
/// # Example
/// ```
/// use cl_termstructures::{Curve, FnCurve};
/// let curve = FnCurve::new(0.0, |t| 1.0 + t);
/// assert_eq!(curve.value(2.0).unwrap(), 3.0);
/// assert!(curve.value(-1.0).is_err());
/// ```
#[derive(Clone)]
pub struct FnCurve<F> {
    initial_time: Time,
    max_time: Time,
    f: F,
}

impl<F> FnCurve<F>
where
    F: Fn(Time) -> Real + Send + Sync,
{
    /// Wrap `f` as a curve defined on `[initial_time, ∞)`.
    pub fn new(initial_time: Time, f: F) -> Self {
        Self {
            initial_time,
            max_time: Time::INFINITY,
            f,
        }
    }

    /// Restrict the domain to `[initial_time, max_time]`.
    pub fn with_max_time(mut self, max_time: Time) -> Self {
        self.max_time = max_time;
        self
    }
}

impl<F> std::fmt::Debug for FnCurve<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCurve")
            .field("initial_time", &self.initial_time)
            .field("max_time", &self.max_time)
            .finish_non_exhaustive()
    }
}

impl<F> Curve for FnCurve<F>
where
    F: Fn(Time) -> Real + Send + Sync,
{
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn max_time(&self) -> Time {
        self.max_time
    }

    fn value_impl(&self, t: Time) -> Result<Real> {
        Ok((self.f)(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cl_core::Error;

    #[test]
    fn value_checks_domain() {
        let curve = FnCurve::new(1.0, |t| 2.0 * t).with_max_time(3.0);
        assert_eq!(curve.value(1.0).unwrap(), 2.0);
        assert_eq!(curve.value(3.0).unwrap(), 6.0);
        assert!(matches!(curve.value(0.5), Err(Error::OutOfDomain { .. })));
        assert!(matches!(curve.value(3.5), Err(Error::OutOfDomain { .. })));
    }

    #[test]
    fn sample_grid_stays_inside_interval() {
        let curve = FnCurve::new(1.0, |t| t * t);
        let grid = curve.sample(1.0, 5.0, 10).unwrap();
        assert_eq!(grid.len(), 11);
        assert_abs_diff_eq!(grid[0].0, 1.0, epsilon = 1e-15);
        let step = 5.0 / 10.25;
        assert_abs_diff_eq!(grid[10].0, 1.0 + 10.0 * step, epsilon = 1e-12);
        assert!(grid[10].0 < 6.0);
        for (t, v) in grid {
            assert_abs_diff_eq!(v, t * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn sample_zero_interval_is_single_node() {
        let curve = FnCurve::new(0.0, |_| 7.0);
        assert_eq!(curve.sample(0.0, 0.0, 10).unwrap(), vec![(0.0, 7.0)]);
    }

    #[test]
    fn shared_curve_is_usable_as_trait_object() {
        let curve: SharedCurve = Arc::new(FnCurve::new(0.0, |t| t + 1.0));
        let other = Arc::clone(&curve);
        assert_eq!(curve.value(1.0).unwrap(), other.value(1.0).unwrap());
    }
}
