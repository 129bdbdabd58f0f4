//! Forward prices of fixed-coupon legs: coupon bonds and annuities.
//!
//! Payments fall on `T, T − δ, T − 2δ, …`.  For evaluation time `t`, let
//! `n` be the number of payment times strictly after `t`; then
//!
//! ```text
//! dirty(t) = N·(q·δ·Σ_{k<n} D(T − kδ) + [bond] D(T)) / D(t)
//! clean(t) = dirty(t) − N·q·(t − (T − nδ))
//! ```
//!
//! `T − nδ` is the last payment time at or before `t`, so on a payment date
//! the accrued interest is zero and the clean price equals the dirty price.

use cl_core::{check_finite, check_positive, errors::Result, Price, Rate, Real, Time};
use cl_termstructures::{Curve, SharedCurve};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed-coupon schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedLeg {
    /// Annual coupon rate `q`.
    pub rate: Rate,
    /// Time between payments `δ > 0`.
    pub period: Time,
    /// Last payment time `T`.
    pub maturity: Time,
    /// Notional `N`.
    #[cfg_attr(feature = "serde", serde(default = "unit_notional"))]
    pub notional: Real,
}

/// Largest number of payments a fixed-leg forward may sum over its domain.
pub const MAX_PAYMENTS: usize = 100_000;

#[cfg(feature = "serde")]
fn unit_notional() -> Real {
    1.0
}

impl FixedLeg {
    /// A schedule with unit notional.
    pub fn new(rate: Rate, period: Time, maturity: Time) -> Self {
        Self {
            rate,
            period,
            maturity,
            notional: 1.0,
        }
    }

    /// Set the notional.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notional = notional;
        self
    }

    /// Coupon paid on each payment date, `N·q·δ`.
    pub fn coupon(&self) -> Real {
        self.notional * self.rate * self.period
    }

    fn validate(&self) -> Result<()> {
        check_finite(self.rate, "coupon rate")?;
        check_positive(self.period, "period")?;
        check_finite(self.maturity, "maturity")?;
        check_finite(self.notional, "notional")?;
        Ok(())
    }

    /// Number of payment times strictly after `t`.
    ///
    /// The result `n` satisfies `payment_time(n) <= t < payment_time(n - 1)`.
    fn remaining(&self, t: Time) -> usize {
        if t >= self.maturity {
            return 0;
        }
        let mut n = ((self.maturity - t) / self.period).ceil() as usize;
        // correct the rounding of the division
        while n > 0 && self.payment_time(n - 1) <= t {
            n -= 1;
        }
        while self.payment_time(n) > t {
            n += 1;
        }
        n
    }

    /// The `k`-th payment time counted back from maturity.
    fn payment_time(&self, k: usize) -> Time {
        self.maturity - k as Real * self.period
    }
}

/// Whether accrued interest is included in the quoted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceQuote {
    /// Price net of accrued interest.
    Clean,
    /// Price including accrued interest.
    #[default]
    Dirty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redemption {
    Notional,
    None,
}

/// Forward-price curve of a coupon bond or an annuity.
#[derive(Debug, Clone)]
pub struct FixedLegForward {
    leg: FixedLeg,
    redemption: Redemption,
    quote: PriceQuote,
    discount: SharedCurve,
}

impl FixedLegForward {
    /// Forward price of a coupon bond: coupons plus the notional at
    /// maturity.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if the period
    /// is not positive, the maturity lies outside the discount curve, or the
    /// schedule has more than [`MAX_PAYMENTS`] payments over the curve's
    /// domain.
    pub fn coupon_bond(leg: FixedLeg, discount: SharedCurve, quote: PriceQuote) -> Result<Self> {
        Self::new(leg, Redemption::Notional, discount, quote)
    }

    /// Forward price of an annuity: coupons only.
    ///
    /// # Errors
    /// Same as [`coupon_bond`](Self::coupon_bond).
    pub fn annuity(leg: FixedLeg, discount: SharedCurve, quote: PriceQuote) -> Result<Self> {
        Self::new(leg, Redemption::None, discount, quote)
    }

    fn new(
        leg: FixedLeg,
        redemption: Redemption,
        discount: SharedCurve,
        quote: PriceQuote,
    ) -> Result<Self> {
        leg.validate()?;
        cl_core::ensure!(
            leg.maturity >= discount.initial_time() && leg.maturity <= discount.max_time(),
            InvalidParameter,
            "maturity {} outside the discount curve's domain [{}, {}]",
            leg.maturity,
            discount.initial_time(),
            discount.max_time()
        );
        let payments = (leg.maturity - discount.initial_time()) / leg.period;
        cl_core::ensure!(
            payments <= MAX_PAYMENTS as Real,
            InvalidParameter,
            "period {} gives {payments:.0} payments before maturity {}, more than {MAX_PAYMENTS}",
            leg.period,
            leg.maturity
        );
        log::debug!("fixed-leg forward {leg:?}, {redemption:?} redemption, {quote:?} price");
        Ok(Self {
            leg,
            redemption,
            quote,
            discount,
        })
    }

    /// The schedule.
    pub fn leg(&self) -> &FixedLeg {
        &self.leg
    }

    /// Accrued interest at `t`: `N·q·(t − last payment at or before t)`.
    pub fn accrued(&self, t: Time) -> Result<Real> {
        self.check_range(t)?;
        let last_paid = self.leg.payment_time(self.leg.remaining(t));
        Ok(self.leg.notional * self.leg.rate * (t - last_paid))
    }
}

impl Curve for FixedLegForward {
    fn initial_time(&self) -> Time {
        self.discount.initial_time()
    }

    fn max_time(&self) -> Time {
        self.leg.maturity
    }

    fn value_impl(&self, t: Time) -> Result<Price> {
        let n = self.leg.remaining(t);
        let mut annuity = 0.0;
        for k in 0..n {
            annuity += self.discount.value(self.leg.payment_time(k))?;
        }
        let mut value = self.leg.coupon() * annuity;
        if self.redemption == Redemption::Notional {
            value += self.leg.notional * self.discount.value(self.leg.maturity)?;
        }
        let mut forward = value / self.discount.value(t)?;
        if self.quote == PriceQuote::Clean {
            let last_paid = self.leg.payment_time(n);
            forward -= self.leg.notional * self.leg.rate * (t - last_paid);
        }
        Ok(forward)
    }
}
