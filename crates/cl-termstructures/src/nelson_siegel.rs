//! Nelson-Siegel and Svensson yield curves.
//!
//! ```text
//! γ_NS(t)  = c0 + c1·shape1(λ(t−t0)) + c2·shape2(λ(t−t0))
//! γ_Sv(t)  = γ_NS(t; λ1) + c3·shape2(λ2(t−t0))
//! ```
//!
//! `λ = 0` is admitted: the shape functions fall back to their Taylor
//! expansions and the curve is flat at `c0 + c1`.

use crate::conversion::DiscountFromYield;
use crate::term_structure::Curve;
use cl_core::{check_finite, check_non_negative, errors::Result, Rate, Real, Time};
use cl_math::{shape1, shape2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ── Nelson-Siegel ─────────────────────────────────────────────────────────────

/// Parameters of the Nelson-Siegel yield curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NelsonSiegelParams {
    /// Long-term level `c0`.
    pub c0: Real,
    /// Loading `c1` of `shape1`.
    pub c1: Real,
    /// Loading `c2` of `shape2`.
    pub c2: Real,
    /// Mean-reversion rate `λ >= 0`.
    pub lambda: Real,
}

impl NelsonSiegelParams {
    fn validate(&self) -> Result<()> {
        check_finite(self.c0, "c0")?;
        check_finite(self.c1, "c1")?;
        check_finite(self.c2, "c2")?;
        check_non_negative(self.lambda, "lambda")?;
        Ok(())
    }
}

/// The Nelson-Siegel yield curve.
///
/// # Example
/// ```
/// use cl_termstructures::{Curve, NelsonSiegelParams, NelsonSiegelYield};
/// let params = NelsonSiegelParams { c0: 0.02, c1: 0.04, c2: 0.06, lambda: 0.05 };
/// let curve = NelsonSiegelYield::new(params, 1.5).unwrap();
/// assert!((curve.value(1.5).unwrap() - 0.06).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelsonSiegelYield {
    params: NelsonSiegelParams,
    initial_time: Time,
}

impl NelsonSiegelYield {
    /// Build the curve from `params` anchored at `initial_time`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if `λ < 0` or a
    /// constant is not finite.
    pub fn new(params: NelsonSiegelParams, initial_time: Time) -> Result<Self> {
        params.validate()?;
        check_finite(initial_time, "initial time")?;
        log::debug!("Nelson-Siegel yield curve {params:?}, t0 = {initial_time}");
        Ok(Self {
            params,
            initial_time,
        })
    }

    /// The model parameters.
    pub fn params(&self) -> &NelsonSiegelParams {
        &self.params
    }

    /// The Nelson-Siegel discount curve `exp(−γ(t)(t − t0))`.
    pub fn into_discount(self) -> DiscountFromYield {
        DiscountFromYield::from_yield(self)
    }
}

impl Curve for NelsonSiegelYield {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        let p = &self.params;
        let x = p.lambda * (t - self.initial_time);
        Ok(p.c0 + p.c1 * shape1(x)? + p.c2 * shape2(x)?)
    }
}

// ── Svensson ──────────────────────────────────────────────────────────────────

/// Parameters of the Svensson yield curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SvenssonParams {
    /// Long-term level `c0`.
    pub c0: Real,
    /// Loading `c1` of `shape1(λ1·)`.
    pub c1: Real,
    /// Loading `c2` of `shape2(λ1·)`.
    pub c2: Real,
    /// Loading `c3` of `shape2(λ2·)`.
    pub c3: Real,
    /// First mean-reversion rate `λ1 >= 0`.
    pub lambda1: Real,
    /// Second mean-reversion rate `λ2 >= 0`, `λ2 != λ1`.
    pub lambda2: Real,
}

/// The Svensson yield curve: Nelson-Siegel plus a second hump term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvenssonYield {
    params: SvenssonParams,
    initial_time: Time,
}

impl SvenssonYield {
    /// Build the curve from `params` anchored at `initial_time`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if a rate is
    /// negative, the two rates coincide, or a constant is not finite.
    pub fn new(params: SvenssonParams, initial_time: Time) -> Result<Self> {
        for (value, name) in [
            (params.c0, "c0"),
            (params.c1, "c1"),
            (params.c2, "c2"),
            (params.c3, "c3"),
            (initial_time, "initial time"),
        ] {
            check_finite(value, name)?;
        }
        check_non_negative(params.lambda1, "lambda1")?;
        check_non_negative(params.lambda2, "lambda2")?;
        cl_core::ensure!(
            params.lambda1 != params.lambda2,
            InvalidParameter,
            "lambda1 and lambda2 must differ, both are {}",
            params.lambda1
        );
        log::debug!("Svensson yield curve {params:?}, t0 = {initial_time}");
        Ok(Self {
            params,
            initial_time,
        })
    }

    /// The model parameters.
    pub fn params(&self) -> &SvenssonParams {
        &self.params
    }

    /// The Svensson discount curve `exp(−γ(t)(t − t0))`.
    pub fn into_discount(self) -> DiscountFromYield {
        DiscountFromYield::from_yield(self)
    }
}

impl Curve for SvenssonYield {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        let p = &self.params;
        let x1 = p.lambda1 * (t - self.initial_time);
        let x2 = p.lambda2 * (t - self.initial_time);
        Ok(p.c0 + p.c1 * shape1(x1)? + p.c2 * shape2(x1)? + p.c3 * shape2(x2)?)
    }
}

// ── Shape curves ──────────────────────────────────────────────────────────────

/// Which shape function a [`YieldShape`] curve evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `(1 − e^{−x})/x`, shared by Hull-White, Nelson-Siegel, Svensson and
    /// Vasicek.
    Level,
    /// `(1 − e^{−x}(1 + x))/x`, shared by Nelson-Siegel and Svensson.
    Hump,
}

/// A single shape term as a curve: `t ↦ shape(λ(t − t0))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldShape {
    shape: Shape,
    lambda: Real,
    initial_time: Time,
}

impl YieldShape {
    /// Build the shape curve.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if `λ < 0`.
    pub fn new(shape: Shape, lambda: Real, initial_time: Time) -> Result<Self> {
        check_non_negative(lambda, "lambda")?;
        check_finite(initial_time, "initial time")?;
        Ok(Self {
            shape,
            lambda,
            initial_time,
        })
    }
}

impl Curve for YieldShape {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<Real> {
        let x = self.lambda * (t - self.initial_time);
        match self.shape {
            Shape::Level => shape1(x),
            Shape::Hump => shape2(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cl_core::Error;

    fn ns_params() -> NelsonSiegelParams {
        NelsonSiegelParams {
            c0: 0.02,
            c1: 0.04,
            c2: 0.06,
            lambda: 0.05,
        }
    }

    #[test]
    fn nelson_siegel_at_initial_time() {
        let curve = NelsonSiegelYield::new(ns_params(), 1.5).unwrap();
        // shape1(0) = 1, shape2(0) = 0
        assert_eq!(curve.value(1.5).unwrap(), 0.02 + 0.04);
    }

    #[test]
    fn nelson_siegel_rises_over_the_short_end() {
        let curve = NelsonSiegelYield::new(ns_params(), 1.5).unwrap();
        let mut previous = curve.value(1.5).unwrap();
        // hump sits near λ(t − t0) ≈ 0.52, i.e. t ≈ 12
        for k in 1..=8 {
            let y = curve.value(1.5 + 1.25 * k as Real).unwrap();
            assert!(y > previous, "yield must increase, {y} <= {previous}");
            assert!(y < 0.02 + 0.04 + 0.06);
            previous = y;
        }
    }

    #[test]
    fn nelson_siegel_long_end_tends_to_level() {
        let curve = NelsonSiegelYield::new(ns_params(), 1.5).unwrap();
        assert!(curve.value(40.0).unwrap() < curve.value(11.5).unwrap());
        assert_abs_diff_eq!(curve.value(1.5 + 2.0e5).unwrap(), 0.02, epsilon = 1e-4);
    }

    #[test]
    fn nelson_siegel_zero_lambda_is_flat() {
        let params = NelsonSiegelParams {
            lambda: 0.0,
            ..ns_params()
        };
        let curve = NelsonSiegelYield::new(params, 0.0).unwrap();
        assert_abs_diff_eq!(curve.value(7.0).unwrap(), 0.06, epsilon = 1e-15);
    }

    #[test]
    fn nelson_siegel_rejects_negative_lambda() {
        let params = NelsonSiegelParams {
            lambda: -0.1,
            ..ns_params()
        };
        assert!(matches!(
            NelsonSiegelYield::new(params, 0.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn nelson_siegel_discount_matches_yield() {
        let curve = NelsonSiegelYield::new(ns_params(), 1.5).unwrap();
        let discount = curve.into_discount();
        assert_abs_diff_eq!(discount.value(1.5).unwrap(), 1.0, epsilon = 1e-15);
        for t in [2.0, 4.0, 6.5] {
            let expected = (-curve.value(t).unwrap() * (t - 1.5)).exp();
            assert_abs_diff_eq!(discount.value(t).unwrap(), expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn svensson_reduces_to_nelson_siegel_without_second_hump() {
        let sv = SvenssonYield::new(
            SvenssonParams {
                c0: 0.02,
                c1: 0.04,
                c2: 0.06,
                c3: 0.0,
                lambda1: 0.05,
                lambda2: 0.5,
            },
            1.0,
        )
        .unwrap();
        let ns = NelsonSiegelYield::new(ns_params(), 1.0).unwrap();
        for t in [1.0, 2.0, 10.0] {
            assert_abs_diff_eq!(sv.value(t).unwrap(), ns.value(t).unwrap(), epsilon = 1e-15);
        }
    }

    #[test]
    fn svensson_second_hump() {
        let params = SvenssonParams {
            c0: 0.03,
            c1: -0.01,
            c2: 0.02,
            c3: 0.05,
            lambda1: 0.3,
            lambda2: 1.2,
        };
        let sv = SvenssonYield::new(params, 0.0).unwrap();
        let t = 2.0;
        let expected = 0.03 - 0.01 * shape1(0.6).unwrap()
            + 0.02 * shape2(0.6).unwrap()
            + 0.05 * shape2(2.4).unwrap();
        assert_abs_diff_eq!(sv.value(t).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    fn svensson_requires_distinct_rates() {
        let params = SvenssonParams {
            c0: 0.03,
            c1: 0.0,
            c2: 0.0,
            c3: 0.0,
            lambda1: 0.4,
            lambda2: 0.4,
        };
        assert!(matches!(
            SvenssonYield::new(params, 0.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn shape_curves() {
        let level = YieldShape::new(Shape::Level, 0.5, 1.0).unwrap();
        let hump = YieldShape::new(Shape::Hump, 0.5, 1.0).unwrap();
        assert_eq!(level.value(1.0).unwrap(), 1.0);
        assert_eq!(hump.value(1.0).unwrap(), 0.0);
        assert_abs_diff_eq!(level.value(3.0).unwrap(), shape1(1.0).unwrap(), epsilon = 1e-15);
        assert_abs_diff_eq!(hump.value(3.0).unwrap(), shape2(1.0).unwrap(), epsilon = 1e-15);
        assert!(level.value(0.5).is_err());
    }
}
