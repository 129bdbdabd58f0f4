//! Yield ⇄ discount conversion.
//!
//! For continuously-compounded yields
//!
//! ```text
//! D(t) = exp(−γ(t)(t − t0)),    γ(t) = −ln D(t) / (t − t0)
//! ```
//!
//! The yield has a removable singularity at `t = t0`; [`YieldFromDiscount`]
//! replaces it by the forward difference `(1 − D(t0 + ε)) / ε`.
//!
//! Every parametric discount curve is a [`DiscountFromYield`] wrapped around
//! its yield curve, so the exponential transform lives in one place.

use crate::term_structure::{BivariateCurve, Curve, SharedCurve};
use cl_core::{errors::Result, DiscountFactor, Error, Rate, Real, Time, EPS};
use std::sync::Arc;

// ── Yield from a single point ─────────────────────────────────────────────────

/// Continuously-compounded yield as a function of maturity `T` and discount
/// factor `d`: `−ln(d) / (T − t0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldFromPoint {
    initial_time: Time,
}

impl YieldFromPoint {
    /// Create the conversion for initial time `t0`.
    pub fn new(initial_time: Time) -> Self {
        Self { initial_time }
    }

    /// The initial time `t0`.
    pub fn initial_time(&self) -> Time {
        self.initial_time
    }
}

impl BivariateCurve for YieldFromPoint {
    /// `x` is the maturity, `y` the discount factor.
    ///
    /// # Errors
    /// [`OutOfDomain`](cl_core::Error::OutOfDomain) if the maturity is not
    /// after `t0 + ε` or the discount factor is not positive.
    fn value(&self, maturity: Time, discount: DiscountFactor) -> Result<Rate> {
        let lower = self.initial_time + EPS;
        if maturity.is_nan() || maturity <= lower {
            return Err(Error::OutOfDomain {
                what: "maturity",
                value: maturity,
                lower,
                upper: Time::INFINITY,
            });
        }
        if discount.is_nan() || discount <= 0.0 {
            return Err(Error::OutOfDomain {
                what: "discount factor",
                value: discount,
                lower: 0.0,
                upper: Real::INFINITY,
            });
        }
        Ok(-discount.ln() / (maturity - self.initial_time))
    }
}

// ── Yield curve from a discount curve ─────────────────────────────────────────

/// The yield curve `γ(t) = −ln D(t) / (t − t0)` of a discount curve.
///
/// For `t < t0 + ε` the forward difference `(1 − D(t0 + ε)) / ε` is returned.
#[derive(Debug, Clone)]
pub struct YieldFromDiscount {
    discount: SharedCurve,
    initial_time: Time,
}

impl YieldFromDiscount {
    /// Derive the yield curve of `discount` relative to `initial_time`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if
    /// `initial_time` precedes the initial time of `discount`.
    pub fn new(discount: SharedCurve, initial_time: Time) -> Result<Self> {
        cl_core::ensure!(
            initial_time >= discount.initial_time(),
            InvalidParameter,
            "initial time {initial_time} precedes the discount curve's initial time {}",
            discount.initial_time()
        );
        log::debug!("yield curve derived from discount curve, t0 = {initial_time}");
        Ok(Self {
            discount,
            initial_time,
        })
    }

    /// The underlying discount curve.
    pub fn discount(&self) -> &SharedCurve {
        &self.discount
    }
}

impl Curve for YieldFromDiscount {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn max_time(&self) -> Time {
        self.discount.max_time()
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        if t < self.initial_time + EPS {
            log::trace!("yield at t = {t} taken as forward difference over EPS");
            let d = self.discount.value(self.initial_time + EPS)?;
            return Ok((1.0 - d) / EPS);
        }
        let d = self.discount.value(t)?;
        Ok(-d.ln() / (t - self.initial_time))
    }
}

// ── Discount curve from a yield curve ─────────────────────────────────────────

/// The discount curve `D(t) = exp(−γ(t)(t − t0))` of a yield curve.
#[derive(Debug, Clone)]
pub struct DiscountFromYield {
    yield_curve: SharedCurve,
}

impl DiscountFromYield {
    /// Derive the discount curve of `yield_curve`, sharing its initial time.
    pub fn new(yield_curve: SharedCurve) -> Self {
        log::debug!(
            "discount curve derived from yield curve, t0 = {}",
            yield_curve.initial_time()
        );
        Self { yield_curve }
    }

    /// Wrap an owned yield curve.
    pub fn from_yield<C: Curve + 'static>(yield_curve: C) -> Self {
        Self::new(Arc::new(yield_curve))
    }

    /// The underlying yield curve.
    pub fn yield_curve(&self) -> &SharedCurve {
        &self.yield_curve
    }
}

impl Curve for DiscountFromYield {
    fn initial_time(&self) -> Time {
        self.yield_curve.initial_time()
    }

    fn max_time(&self) -> Time {
        self.yield_curve.max_time()
    }

    fn value_impl(&self, t: Time) -> Result<DiscountFactor> {
        let gamma = self.yield_curve.value(t)?;
        Ok((-gamma * (t - self.initial_time())).exp())
    }
}
