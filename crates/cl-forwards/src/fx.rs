//! FX forwards by covered interest parity.
//!
//! ```text
//! F(t) = X0 · D_foreign(t) / D_domestic(t)
//! ```

use cl_core::{check_positive, errors::Result, settings::floor_eps, Error, Price, Real, Time, EPS};
use cl_termstructures::{BivariateCurve, Curve, SharedCurve};

/// FX forward as a function of the two discount factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxForwardFromFactors {
    spot: Price,
}

impl FxForwardFromFactors {
    /// Create the function for spot exchange rate `spot`.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless the spot
    /// is positive.
    pub fn new(spot: Price) -> Result<Self> {
        check_positive(spot, "spot exchange rate")?;
        Ok(Self { spot })
    }
}

impl BivariateCurve for FxForwardFromFactors {
    /// `x` is the domestic discount factor, `y` the foreign one.
    ///
    /// # Errors
    /// [`OutOfDomain`](cl_core::Error::OutOfDomain) if the domestic factor is
    /// not above `ε`.
    fn value(&self, domestic: Real, foreign: Real) -> Result<Price> {
        if domestic.is_nan() || domestic <= EPS {
            return Err(Error::OutOfDomain {
                what: "domestic discount factor",
                value: domestic,
                lower: EPS,
                upper: Real::INFINITY,
            });
        }
        Ok(self.spot * foreign / domestic)
    }
}

/// FX forward curve from domestic and foreign discount curves.
///
/// A domestic discount factor below `ε` is floored at `ε`.
#[derive(Debug, Clone)]
pub struct FxForward {
    spot: Price,
    domestic: SharedCurve,
    foreign: SharedCurve,
}

impl FxForward {
    /// Build the curve. Its domain is the intersection of the two discount
    /// curves' domains.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless the spot
    /// is positive and the domains overlap.
    pub fn new(spot: Price, domestic: SharedCurve, foreign: SharedCurve) -> Result<Self> {
        check_positive(spot, "spot exchange rate")?;
        let lower = domestic.initial_time().max(foreign.initial_time());
        let upper = domestic.max_time().min(foreign.max_time());
        cl_core::ensure!(
            lower <= upper,
            InvalidParameter,
            "domestic and foreign discount curves do not overlap"
        );
        log::debug!("FX forward, spot = {spot}, domain [{lower}, {upper}]");
        Ok(Self {
            spot,
            domestic,
            foreign,
        })
    }
}

impl Curve for FxForward {
    fn initial_time(&self) -> Time {
        self.domestic.initial_time().max(self.foreign.initial_time())
    }

    fn max_time(&self) -> Time {
        self.domestic.max_time().min(self.foreign.max_time())
    }

    fn value_impl(&self, t: Time) -> Result<Price> {
        let domestic = self.domestic.value(t)?;
        if domestic < EPS {
            log::trace!("domestic discount factor {domestic} at t = {t} floored at EPS");
        }
        Ok(self.spot * self.foreign.value(t)? / floor_eps(domestic))
    }
}
