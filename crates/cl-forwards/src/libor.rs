//! Forward LIBOR: the simple rate over `[t, t + δ]`.
//!
//! ```text
//! L(t) = (D(t)/D(t + δ) − 1) / δ
//! ```
//!
//! Both `D(t + δ)` and `δ` are floored at `ε`.

use cl_core::{check_non_negative, errors::Result, settings::floor_eps, Rate, Time, EPS};
use cl_termstructures::{Curve, SharedCurve};

/// Forward LIBOR curve for a fixed accrual period.
#[derive(Debug, Clone)]
pub struct LiborForward {
    period: Time,
    discount: SharedCurve,
}

impl LiborForward {
    /// Build the curve.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) if the period
    /// is negative.
    pub fn new(period: Time, discount: SharedCurve) -> Result<Self> {
        check_non_negative(period, "LIBOR period")?;
        log::debug!("forward LIBOR, period = {period}");
        Ok(Self { period, discount })
    }

    /// The accrual period `δ`.
    pub fn period(&self) -> Time {
        self.period
    }
}

impl Curve for LiborForward {
    fn initial_time(&self) -> Time {
        self.discount.initial_time()
    }

    fn max_time(&self) -> Time {
        self.discount.max_time() - self.period
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        // t <= max_time() may still put t + δ one ulp past the discount curve
        let end = self
            .discount
            .value((t + self.period).min(self.discount.max_time()))?;
        if end < EPS || self.period < EPS {
            log::trace!("LIBOR at t = {t}: D(t + δ) = {end}, δ = {} floored at EPS", self.period);
        }
        let ratio = self.discount.value(t)? / floor_eps(end);
        Ok((ratio - 1.0) / floor_eps(self.period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cl_core::{Error, Real};
    use cl_termstructures::{FlatForward, FnCurve, LogLinearDiscount, MarketSeries};
    use std::sync::Arc;

    #[test]
    fn flat_curve_gives_simple_rate() {
        let r: Real = 0.04;
        let discount: SharedCurve = Arc::new(FlatForward::new(r, 0.0).unwrap());
        let libor = LiborForward::new(0.25, discount).unwrap();
        let expected = ((r * 0.25).exp() - 1.0) / 0.25;
        for t in [0.0, 1.0, 7.5] {
            assert_abs_diff_eq!(libor.value(t).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_period_divides_by_eps() {
        let discount: SharedCurve = Arc::new(FlatForward::new(0.04, 0.0).unwrap());
        let libor = LiborForward::new(0.0, discount).unwrap();
        // D(t)/D(t) = 1 exactly, so the rate is 0 / EPS.
        assert_eq!(libor.value(1.0).unwrap(), 0.0);
    }

    #[test]
    fn vanishing_discount_is_floored() {
        let discount: SharedCurve =
            Arc::new(FnCurve::new(0.0, |t| if t > 1.0 { 0.0 } else { 1.0 }));
        let libor = LiborForward::new(0.5, discount).unwrap();
        let expected = (1.0 / EPS - 1.0) / 0.5;
        assert_abs_diff_eq!(libor.value(0.75).unwrap(), expected, epsilon = 1e-3);
    }

    #[test]
    fn evaluates_at_its_own_max_time() {
        let quotes = MarketSeries::new(0.0, vec![0.5, 7.3], vec![0.99, 0.8]).unwrap();
        let discount: SharedCurve = Arc::new(LogLinearDiscount::new(&quotes).unwrap());
        let libor = LiborForward::new(0.9, discount).unwrap();
        assert!(libor.value(libor.max_time()).is_ok());
    }

    #[test]
    fn domain_and_validation() {
        let discount: SharedCurve =
            Arc::new(FnCurve::new(0.0, |t| (-0.03 * t).exp()).with_max_time(5.0));
        let libor = LiborForward::new(0.5, Arc::clone(&discount)).unwrap();
        assert_eq!(libor.max_time(), 4.5);
        assert!(matches!(libor.value(4.75), Err(Error::OutOfDomain { .. })));
        assert!(matches!(
            LiborForward::new(-0.5, discount),
            Err(Error::InvalidParameter(_))
        ));
    }
}
