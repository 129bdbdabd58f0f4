//! Cost-of-carry curves.
//!
//! A forward price `F(t)` and spot `S` imply the continuously-compounded
//! carry rate `q(t) = ln(F(t)/S)/(t − t0)`, so that `F(t) = S·e^{q(t)(t − t0)}`.

use crate::market_series::MarketSeries;
use crate::term_structure::{BivariateCurve, Curve};
use cl_core::{
    check_finite, check_non_negative, check_positive, errors::Result, Error, Price, Rate, Real,
    Time, EPS,
};
use cl_math::{shape1, Interpolation1D, LinearInterpolation};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ── Black model ───────────────────────────────────────────────────────────────

/// Parameters of an Ornstein-Uhlenbeck log-price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrnsteinUhlenbeckParams {
    /// Drift constant `θ`.
    pub theta: Real,
    /// Mean-reversion rate `λ >= 0`.
    pub lambda: Real,
    /// Volatility `σ >= 0`.
    pub sigma: Real,
}

/// Cost-of-carry curve of the Black model,
/// `q(t) = θ·shape1(λ(t − t0)) + (σ²/2)·shape1(2λ(t − t0))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackCarry {
    params: OrnsteinUhlenbeckParams,
    initial_time: Time,
}

impl BlackCarry {
    /// Build the curve.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if `λ` or `σ`
    /// is negative.
    pub fn new(params: OrnsteinUhlenbeckParams, initial_time: Time) -> Result<Self> {
        check_finite(params.theta, "theta")?;
        check_non_negative(params.lambda, "lambda")?;
        check_non_negative(params.sigma, "sigma")?;
        check_finite(initial_time, "initial time")?;
        log::debug!("Black cost-of-carry curve {params:?}, t0 = {initial_time}");
        Ok(Self {
            params,
            initial_time,
        })
    }

    /// The model parameters.
    pub fn params(&self) -> &OrnsteinUhlenbeckParams {
        &self.params
    }
}

impl Curve for BlackCarry {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        let p = &self.params;
        let x = p.lambda * (t - self.initial_time);
        Ok(p.theta * shape1(x)? + 0.5 * p.sigma * p.sigma * shape1(2.0 * x)?)
    }
}

// ── Carry rate of a forward price ─────────────────────────────────────────────

/// Carry rate as a function of forward price `F` and delivery time `t`:
/// `ln(F/S)/(t − t0)`, with the divisor floored at `ε`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostOfCarry {
    spot: Price,
    initial_time: Time,
}

impl CostOfCarry {
    /// Create the conversion for spot price `spot` at `initial_time`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless the spot
    /// is positive.
    pub fn new(spot: Price, initial_time: Time) -> Result<Self> {
        check_positive(spot, "spot")?;
        check_finite(initial_time, "initial time")?;
        Ok(Self { spot, initial_time })
    }

    /// The spot price.
    pub fn spot(&self) -> Price {
        self.spot
    }
}

impl BivariateCurve for CostOfCarry {
    /// `x` is the forward price, `y` the delivery time.
    ///
    /// # Errors
    /// [`OutOfDomain`](cl_core::Error::OutOfDomain) if the forward price is
    /// not positive or the delivery time precedes `t0`.
    fn value(&self, forward: Price, t: Time) -> Result<Rate> {
        cl_core::check_range("delivery time", t, self.initial_time, Time::INFINITY)?;
        if forward.is_nan() || forward <= 0.0 {
            return Err(Error::OutOfDomain {
                what: "forward price",
                value: forward,
                lower: 0.0,
                upper: Price::INFINITY,
            });
        }
        let elapsed = t - self.initial_time;
        let elapsed = if elapsed < EPS {
            log::trace!("carry rate at t = {t} divided by EPS");
            EPS
        } else {
            elapsed
        };
        Ok((forward / self.spot).ln() / elapsed)
    }
}

// ── Interpolated forward ──────────────────────────────────────────────────────

/// Forward-price curve by linear interpolation of carry rates.
///
/// Quoted forward prices are turned into carry rates once, at construction.
/// Up to the first delivery time the rate is flat at the first quote's rate;
/// beyond it the rate is interpolated linearly and the forward price is
/// `S·exp(q(t)(t − t0))`.
///
/// # Example
/// ```
/// use cl_termstructures::{CarryInterpolatedForward, Curve, MarketSeries};
/// let quotes = MarketSeries::new(0.0, vec![1.0, 2.0], vec![102.0, 104.5]).unwrap();
/// let curve = CarryInterpolatedForward::new(100.0, &quotes).unwrap();
/// assert_eq!(curve.value(0.0).unwrap(), 100.0);
/// assert!((curve.value(1.0).unwrap() - 102.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CarryInterpolatedForward {
    carry: CostOfCarry,
    rates: LinearInterpolation,
}

impl CarryInterpolatedForward {
    /// Build the curve from the spot price and quoted forward prices.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless the spot
    /// is positive; [`MalformedSeries`](cl_core::Error::MalformedSeries) if a
    /// forward price is not positive.
    pub fn new(spot: Price, forwards: &MarketSeries) -> Result<Self> {
        let t0 = forwards.initial_time();
        let carry = CostOfCarry::new(spot, t0)?;
        cl_core::ensure!(
            forwards.values().iter().all(|&f| f > 0.0),
            MalformedSeries,
            "forward prices must be positive"
        );
        let rates = forwards
            .iter()
            .map(|(t, f)| carry.value(f, t))
            .collect::<Result<Arc<[Rate]>>>()?;
        let rates = LinearInterpolation::new(t0, rates[0], forwards.shared_times(), rates)?;
        log::debug!(
            "carry-interpolated forward curve over {} quotes, spot = {spot}, t0 = {t0}",
            forwards.len()
        );
        Ok(Self { carry, rates })
    }

    /// The interpolated carry rate at `t`.
    pub fn carry_rate(&self, t: Time) -> Result<Rate> {
        self.check_range(t)?;
        Ok(self.rates.operator(t))
    }
}

impl Curve for CarryInterpolatedForward {
    fn initial_time(&self) -> Time {
        self.rates.x_min()
    }

    fn max_time(&self) -> Time {
        self.rates.x_max()
    }

    fn value_impl(&self, t: Time) -> Result<Price> {
        let q = self.rates.operator(t);
        Ok(self.carry.spot() * (q * (t - self.initial_time())).exp())
    }
}
