//! `FlatForward` — a discount curve with a constant continuously-compounded
//! rate.
//!
//! This is the simplest possible discount curve, `D(t) = exp(−r(t − t0))`,
//! and the usual dependency when checking forward-price curves against
//! closed forms.

use crate::term_structure::Curve;
use cl_core::{check_finite, errors::Result, DiscountFactor, Rate, Time};

/// A flat (constant) continuously-compounded discount curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForward {
    rate: Rate,
    initial_time: Time,
}

impl FlatForward {
    /// Create a flat discount curve from a continuously-compounded rate.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`](cl_core::Error::InvalidParameter) if the
    /// rate or the initial time is not finite.
    pub fn new(rate: Rate, initial_time: Time) -> Result<Self> {
        check_finite(rate, "rate")?;
        check_finite(initial_time, "initial time")?;
        Ok(Self { rate, initial_time })
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl Curve for FlatForward {
    fn initial_time(&self) -> Time {
        self.initial_time
    }

    fn value_impl(&self, t: Time) -> Result<DiscountFactor> {
        Ok((-self.rate * (t - self.initial_time)).exp())
    }
}
