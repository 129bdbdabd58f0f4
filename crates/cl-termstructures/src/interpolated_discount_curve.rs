//! Discount curves interpolated from market discount factors.
//!
//! Two schemes are provided:
//!
//! * [`YieldInterpolatedDiscount`] interpolates continuously-compounded
//!   yields linearly, anchored at a caller-supplied initial short rate.
//! * [`LogLinearDiscount`] interpolates `ln D` linearly, anchored at
//!   `ln D(t0) = 0`, which gives piecewise-constant forward rates.
//!
//! Both transform the quotes once at construction and share the quote times
//! with the [`MarketSeries`] they were built from.  Neither recomputes a
//! transform at `t0`, so evaluating at the initial time never divides by zero.

use crate::conversion::YieldFromPoint;
use crate::market_series::MarketSeries;
use crate::term_structure::{BivariateCurve, Curve};
use cl_core::{check_finite, errors::Result, DiscountFactor, Rate, Time};
use cl_math::{Interpolation1D, LinearInterpolation, LogLinearInterpolation};
use std::sync::Arc;

// ── Linear in yield ───────────────────────────────────────────────────────────

/// Discount curve by linear interpolation of yields.
#[derive(Debug, Clone)]
pub struct YieldInterpolatedDiscount {
    yields: LinearInterpolation,
}

impl YieldInterpolatedDiscount {
    /// Build the curve from quoted discount factors and the initial short
    /// rate, which serves as the yield at `t0`.
    ///
    /// # Errors
    /// [`MalformedSeries`](cl_core::Error::MalformedSeries) if a discount
    /// factor is not positive; [`InvalidParameter`](cl_core::Error::InvalidParameter)
    /// if the short rate is not finite.
    pub fn new(discounts: &MarketSeries, short_rate: Rate) -> Result<Self> {
        check_finite(short_rate, "short rate")?;
        let t0 = discounts.initial_time();
        cl_core::ensure!(
            discounts.values().iter().all(|&d| d > 0.0),
            MalformedSeries,
            "discount factors must be positive"
        );
        let to_yield = YieldFromPoint::new(t0);
        let yields = discounts
            .iter()
            .map(|(t, d)| to_yield.value(t, d))
            .collect::<Result<Arc<[Rate]>>>()?;
        log::debug!(
            "yield-interpolated discount curve over {} quotes, t0 = {t0}",
            discounts.len()
        );
        Ok(Self {
            yields: LinearInterpolation::new(t0, short_rate, discounts.shared_times(), yields)?,
        })
    }

    /// The interpolated yield at `t`.
    pub fn zero_rate(&self, t: Time) -> Result<Rate> {
        self.check_range(t)?;
        Ok(self.yields.operator(t))
    }
}

impl Curve for YieldInterpolatedDiscount {
    fn initial_time(&self) -> Time {
        self.yields.x_min()
    }

    fn max_time(&self) -> Time {
        self.yields.x_max()
    }

    fn value_impl(&self, t: Time) -> Result<DiscountFactor> {
        Ok((-self.yields.operator(t) * (t - self.initial_time())).exp())
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Discount curve by log-linear interpolation of discount factors.
#[derive(Debug, Clone)]
pub struct LogLinearDiscount {
    log_discounts: LogLinearInterpolation,
}

impl LogLinearDiscount {
    /// Build the curve from quoted discount factors, with `D(t0) = 1`.
    ///
    /// # Errors
    /// [`MalformedSeries`](cl_core::Error::MalformedSeries) if a discount
    /// factor is not positive.
    pub fn new(discounts: &MarketSeries) -> Result<Self> {
        let log_discounts = LogLinearInterpolation::new(
            discounts.initial_time(),
            1.0,
            discounts.shared_times(),
            discounts.values(),
        )?;
        log::debug!(
            "log-linear discount curve over {} quotes, t0 = {}",
            discounts.len(),
            discounts.initial_time()
        );
        Ok(Self { log_discounts })
    }
}

impl Curve for LogLinearDiscount {
    fn initial_time(&self) -> Time {
        self.log_discounts.x_min()
    }

    fn max_time(&self) -> Time {
        self.log_discounts.x_max()
    }

    fn value_impl(&self, t: Time) -> Result<DiscountFactor> {
        Ok(self.log_discounts.operator(t))
    }
}
