//! Volatility curves.
//!
//! * [`BlackVolatility`]: stationary implied volatility of an
//!   Ornstein-Uhlenbeck log-price, `σ·sqrt(shape1(2λ(t − t0)))`.
//! * [`HullWhiteVolatility`]: stationary implied volatility of a zero-coupon
//!   bond option in the Hull-White model, a function of option maturity `s`
//!   and bond maturity `t`.
//! * [`VolatilityFromVariance`]: `sqrt(V(t)/(t − t0))` of a total-variance
//!   curve.
//! * [`LinearVarianceVolatility`]: piecewise-linear volatility through market
//!   quotes, flat up to the second quote.

use crate::market_series::MarketSeries;
use crate::term_structure::{BivariateCurve, Curve, SharedCurve};
use cl_core::{
    check_finite, check_non_negative, check_positive, check_range, errors::Result, Error, Real,
    Time, Volatility, EPS,
};
use cl_math::{first_not_less, shape1, shape1_scaled};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Volatility `σ` and mean-reversion `λ` shared by the stationary
/// volatility models.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolatilityParams {
    /// Volatility `σ > 0`.
    pub sigma: Volatility,
    /// Mean-reversion rate `λ >= 0`.
    pub lambda: Real,
}

impl VolatilityParams {
    fn validate(&self) -> Result<()> {
        check_positive(self.sigma, "sigma")?;
        check_non_negative(self.lambda, "lambda")?;
        Ok(())
    }

    /// `σ·sqrt(shape1(2λ(s − t0)))`, the stationary scaling at option
    /// maturity `s`.
    fn stationary(&self, elapsed: Time) -> Result<Volatility> {
        Ok(self.sigma * shape1(2.0 * self.lambda * elapsed)?.sqrt())
    }
}

// ── Black ─────────────────────────────────────────────────────────────────────

/// Stationary implied volatility in the Black model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackVolatility {
    params: VolatilityParams,
    initial_time: Time,
}

impl BlackVolatility {
    /// Build the curve.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless `σ > 0`
    /// and `λ >= 0`.
    pub fn new(params: VolatilityParams, initial_time: Time) -> Result<Self> {
        params.validate()?;
        check_finite(initial_time, "initial time")?;
        log::debug!("Black stationary volatility {params:?}, t0 = {initial_time}");
        Ok(Self {
            params,
            initial_time,
        })
    }
}

impl Curve for BlackVolatility {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<Volatility> {
        self.params.stationary(t - self.initial_time)
    }
}

// ── Hull-White ────────────────────────────────────────────────────────────────

/// Stationary implied volatility `Σ(s, t)` of a bond option in the
/// Hull-White model.
///
/// With `τ = t − s` and `z = λτ`,
///
/// ```text
/// Σ(s, t) = σ · b(τ) · sqrt(shape1(2λ(s − t0)))
/// b(τ) = (1 − e^{−z})/λ                      if z > ε
///      = τ(1 − z/2 + z²/6 − z³/24)           otherwise
/// ```
///
/// The second branch is a quartic expansion in `τ`, not the limit of the
/// first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullWhiteVolatility {
    params: VolatilityParams,
    initial_time: Time,
}

impl HullWhiteVolatility {
    /// Build the surface.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless `σ > 0`
    /// and `λ >= 0`.
    pub fn new(params: VolatilityParams, initial_time: Time) -> Result<Self> {
        params.validate()?;
        check_finite(initial_time, "initial time")?;
        log::debug!("Hull-White stationary volatility {params:?}, t0 = {initial_time}");
        Ok(Self {
            params,
            initial_time,
        })
    }

    /// The initial time `t0`.
    pub fn initial_time(&self) -> Time {
        self.initial_time
    }

    /// The curve `s ↦ Σ(s, s + tenor)` for a fixed bond tenor.
    pub fn with_tenor(self, tenor: Time) -> Result<HullWhiteTenorVolatility> {
        check_positive(tenor, "tenor")?;
        Ok(HullWhiteTenorVolatility {
            surface: self,
            tenor,
        })
    }

    fn bond_factor(&self, tau: Time) -> Result<Real> {
        let z = self.params.lambda * tau;
        if z > EPS {
            shape1_scaled(z, tau)
        } else {
            log::trace!("Hull-White bond factor at z = {z} from quartic expansion");
            Ok(tau * (1.0 - z / 2.0 + z * z / 6.0 - z * z * z / 24.0))
        }
    }
}

impl BivariateCurve for HullWhiteVolatility {
    /// `x` is the option maturity `s`, `y` the bond maturity `t`.
    ///
    /// # Errors
    /// [`OutOfDomain`](cl_core::Error::OutOfDomain) unless `t0 <= s < t`.
    fn value(&self, s: Time, t: Time) -> Result<Volatility> {
        check_range("option maturity", s, self.initial_time, Time::INFINITY)?;
        if t.is_nan() || t <= s {
            return Err(Error::OutOfDomain {
                what: "bond maturity",
                value: t,
                lower: s,
                upper: Time::INFINITY,
            });
        }
        let stationary = self.params.stationary(s - self.initial_time)?;
        Ok(self.bond_factor(t - s)? * stationary)
    }
}

/// Hull-White volatility along option maturity for a fixed bond tenor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullWhiteTenorVolatility {
    surface: HullWhiteVolatility,
    tenor: Time,
}

impl Curve for HullWhiteTenorVolatility {
    fn initial_time(&self) -> Time {
        self.surface.initial_time
    }

    fn value_impl(&self, s: Time) -> Result<Volatility> {
        self.surface.value(s, s + self.tenor)
    }
}

// ── From variance ─────────────────────────────────────────────────────────────

/// The volatility curve `sqrt(V(t)/(t − t0))` of a total-variance curve.
///
/// Within `ε` of `t0` the value is `sqrt(V(t0 + ε)/ε)`.
#[derive(Debug, Clone)]
pub struct VolatilityFromVariance {
    variance: SharedCurve,
    initial_time: Time,
}

impl VolatilityFromVariance {
    /// Derive the volatility curve of `variance` relative to `initial_time`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if
    /// `initial_time` precedes the initial time of `variance`.
    pub fn new(variance: SharedCurve, initial_time: Time) -> Result<Self> {
        cl_core::ensure!(
            initial_time >= variance.initial_time(),
            InvalidParameter,
            "initial time {initial_time} precedes the variance curve's initial time {}",
            variance.initial_time()
        );
        Ok(Self {
            variance,
            initial_time,
        })
    }
}

impl Curve for VolatilityFromVariance {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn max_time(&self) -> Time {
        self.variance.max_time()
    }

    fn value_impl(&self, t: Time) -> Result<Volatility> {
        let (at, elapsed) = if t - self.initial_time < EPS {
            log::trace!("volatility at t = {t} taken from variance at t0 + EPS");
            (self.initial_time + EPS, EPS)
        } else {
            (t, t - self.initial_time)
        };
        let variance = self.variance.value(at)?;
        if variance.is_nan() || variance < 0.0 {
            return Err(Error::OutOfDomain {
                what: "variance",
                value: variance,
                lower: 0.0,
                upper: Real::INFINITY,
            });
        }
        Ok((variance / elapsed).sqrt())
    }
}

// ── Linear interpolation of quotes ────────────────────────────────────────────

/// Volatility by linear interpolation of quoted values.
///
/// On `[t0, times[1]]` the curve is flat at `values[1]`; past `times[1]` it
/// interpolates the quotes linearly.
#[derive(Debug, Clone)]
pub struct LinearVarianceVolatility {
    series: MarketSeries,
}

impl LinearVarianceVolatility {
    /// Build the curve from at least two quotes.
    ///
    /// # Errors
    /// [`MalformedSeries`](cl_core::Error::MalformedSeries) if the series has
    /// fewer than two quotes.
    pub fn new(series: &MarketSeries) -> Result<Self> {
        cl_core::ensure!(
            series.len() >= 2,
            MalformedSeries,
            "at least two quotes are required, got {}",
            series.len()
        );
        log::debug!(
            "linear volatility over {} quotes, t0 = {}",
            series.len(),
            series.initial_time()
        );
        Ok(Self {
            series: series.clone(),
        })
    }
}

impl Curve for LinearVarianceVolatility {
    fn initial_time(&self) -> Time {
        self.series.initial_time()
    }

    fn max_time(&self) -> Time {
        self.series.last_time()
    }

    fn value_impl(&self, t: Time) -> Result<Volatility> {
        let times = self.series.times();
        let values = self.series.values();
        if t <= times[1] {
            return Ok(values[1]);
        }
        let i = first_not_less(times, t).min(times.len() - 1);
        let (x0, x1) = (times[i - 1], times[i]);
        let (y0, y1) = (values[i - 1], values[i]);
        let w = (t - x0) / (x1 - x0);
        Ok(y0 + w * (y1 - y0))
    }
}
