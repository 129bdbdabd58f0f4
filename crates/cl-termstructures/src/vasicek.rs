//! Vasicek short-rate model yield curve.
//!
//! Under `dr = λ(θ/λ − r)dt + σ dW` the zero-coupon yield is
//!
//! ```text
//! γ(t) = r0·A + (θ/λ)(1 − A) − (σ²/2λ²)(1 − 2A + B)
//! A = shape1(λ(t − t0)),  B = shape1(2λ(t − t0))
//! ```
//!
//! Unlike Nelson-Siegel, the pure-diffusion case `λ = 0` is rejected.

use crate::conversion::DiscountFromYield;
use crate::term_structure::Curve;
use cl_core::{check_finite, check_positive, errors::Result, Rate, Real, Time};
use cl_math::shape1;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the Vasicek model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VasicekParams {
    /// Drift constant `θ`; the long-run short rate is `θ/λ`.
    pub theta: Real,
    /// Mean-reversion rate `λ > 0`.
    pub lambda: Real,
    /// Short-rate volatility `σ > 0`.
    pub sigma: Real,
    /// Short rate at the initial time.
    pub r0: Rate,
}

/// The Vasicek yield curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VasicekYield {
    params: VasicekParams,
    initial_time: Time,
}

impl VasicekYield {
    /// Build the curve from `params` anchored at `initial_time`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless `λ > 0`
    /// and `σ > 0`.
    pub fn new(params: VasicekParams, initial_time: Time) -> Result<Self> {
        check_finite(params.theta, "theta")?;
        check_finite(params.r0, "r0")?;
        check_positive(params.lambda, "lambda")?;
        check_positive(params.sigma, "sigma")?;
        check_finite(initial_time, "initial time")?;
        log::debug!("Vasicek yield curve {params:?}, t0 = {initial_time}");
        Ok(Self {
            params,
            initial_time,
        })
    }

    /// The model parameters.
    pub fn params(&self) -> &VasicekParams {
        &self.params
    }

    /// The long-run yield `θ/λ − σ²/(2λ²)`.
    pub fn long_run_yield(&self) -> Rate {
        let p = &self.params;
        p.theta / p.lambda - 0.5 * p.sigma * p.sigma / (p.lambda * p.lambda)
    }

    /// The Vasicek discount curve `exp(−γ(t)(t − t0))`.
    pub fn into_discount(self) -> DiscountFromYield {
        DiscountFromYield::from_yield(self)
    }
}

impl Curve for VasicekYield {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        let p = &self.params;
        let x = p.lambda * (t - self.initial_time);
        let a = shape1(x)?;
        let b = shape1(2.0 * x)?;
        let half_var = 0.5 * p.sigma * p.sigma / (p.lambda * p.lambda);
        Ok(p.r0 * a + (p.theta / p.lambda) * (1.0 - a) - half_var * (1.0 - 2.0 * a + b))
    }
}
