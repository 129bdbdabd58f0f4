//! Forward price of a schedule of fixed payments.
//!
//! ```text
//! F(t) = Σ_{t_i > t} P_i·D(t_i) / D(t)
//! ```
//!
//! A payment due exactly at `t` goes to the holder of the underlying, so it
//! is excluded.  The one exception is the last payment time, where the
//! forward is the last payment itself.

use cl_core::{errors::Result, Price, Real, Time};
use cl_termstructures::{Curve, MarketSeries, SharedCurve};

/// Forward-price curve of a fixed payment schedule.
///
/// # Example
/// ```
/// use cl_forwards::CashFlowForward;
/// use cl_termstructures::{Curve, FlatForward, MarketSeries};
/// use std::sync::Arc;
///
/// let discount = Arc::new(FlatForward::new(0.05, 0.0).unwrap());
/// let payments = MarketSeries::new(0.0, vec![1.0, 2.0], vec![5.0, 105.0]).unwrap();
/// let forward = CashFlowForward::new(&payments, discount).unwrap();
/// assert!((forward.value(2.0).unwrap() - 105.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CashFlowForward {
    payments: MarketSeries,
    discount: SharedCurve,
}

impl CashFlowForward {
    /// Build the curve from payment times and amounts.
    ///
    /// # Errors
    /// [`MalformedSeries`](cl_core::Error::MalformedSeries) if the schedule
    /// starts before the discount curve or runs past its last time.
    pub fn new(payments: &MarketSeries, discount: SharedCurve) -> Result<Self> {
        cl_core::ensure!(
            payments.initial_time() >= discount.initial_time(),
            MalformedSeries,
            "payment schedule anchored at {} precedes the discount curve's initial time {}",
            payments.initial_time(),
            discount.initial_time()
        );
        cl_core::ensure!(
            payments.last_time() <= discount.max_time(),
            MalformedSeries,
            "last payment at {} is beyond the discount curve's last time {}",
            payments.last_time(),
            discount.max_time()
        );
        log::debug!(
            "cash-flow forward over {} payments, last at {}",
            payments.len(),
            payments.last_time()
        );
        Ok(Self {
            payments: payments.clone(),
            discount,
        })
    }

    /// The payment schedule.
    pub fn payments(&self) -> &MarketSeries {
        &self.payments
    }

    /// Value at `t0` of the payments due after `t`, or of the last payment
    /// when `t` is the last payment time.
    fn remaining_value(&self, t: Time) -> Result<Real> {
        let start = self
            .payments
            .times()
            .partition_point(|&ti| ti <= t)
            .min(self.payments.len().saturating_sub(1));
        self.payments
            .iter()
            .skip(start)
            .map(|(time, amount)| -> Result<Real> { Ok(amount * self.discount.value(time)?) })
            .sum()
    }
}

impl Curve for CashFlowForward {
    fn initial_time(&self) -> Time {
        self.payments.initial_time()
    }

    fn max_time(&self) -> Time {
        self.payments.last_time()
    }

    fn value_impl(&self, t: Time) -> Result<Price> {
        Ok(self.remaining_value(t)? / self.discount.value(t)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cl_core::Error;
    use cl_termstructures::{FlatForward, FnCurve};
    use std::sync::Arc;

    fn flat(rate: Real) -> SharedCurve {
        Arc::new(FlatForward::new(rate, 0.0).unwrap())
    }

    #[test]
    fn forward_of_single_payment_grows_at_the_rate() {
        let payments = MarketSeries::new(0.0, vec![3.0], vec![100.0]).unwrap();
        let forward = CashFlowForward::new(&payments, flat(0.04)).unwrap();
        assert_abs_diff_eq!(
            forward.value(0.0).unwrap(),
            100.0 * (-0.12_f64).exp(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            forward.value(1.0).unwrap(),
            100.0 * (-0.08_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn paid_flows_drop_out() {
        let payments = MarketSeries::new(0.0, vec![1.0, 2.0, 3.0], vec![5.0, 5.0, 105.0]).unwrap();
        let forward = CashFlowForward::new(&payments, flat(0.03)).unwrap();
        let d = |t: Real| (-0.03 * t).exp();
        let expected = (5.0 * d(2.0) + 105.0 * d(3.0)) / d(1.5);
        assert_abs_diff_eq!(forward.value(1.5).unwrap(), expected, epsilon = 1e-12);

        // The payment due at t is excluded.
        let expected = 105.0 * d(3.0) / d(2.0);
        assert_abs_diff_eq!(forward.value(2.0).unwrap(), expected, epsilon = 1e-12);
        let expected = (5.0 * d(2.0) + 105.0 * d(3.0)) / d(1.0);
        assert_abs_diff_eq!(forward.value(1.0).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn last_payment_time() {
        let payments = MarketSeries::new(0.0, vec![1.0, 2.5], vec![4.0, 104.0]).unwrap();
        let forward = CashFlowForward::new(&payments, flat(0.06)).unwrap();
        assert_abs_diff_eq!(forward.value(2.5).unwrap(), 104.0, epsilon = 1e-12);
        assert!(matches!(forward.value(2.6), Err(Error::OutOfDomain { .. })));
    }

    #[test]
    fn schedule_must_fit_the_discount_curve() {
        let short: SharedCurve = Arc::new(FnCurve::new(0.0, |_| 1.0).with_max_time(2.0));
        let payments = MarketSeries::new(0.0, vec![1.0, 3.0], vec![1.0, 1.0]).unwrap();
        assert!(matches!(
            CashFlowForward::new(&payments, short),
            Err(Error::MalformedSeries(_))
        ));

        let late = Arc::new(FlatForward::new(0.01, 0.5).unwrap());
        assert!(matches!(
            CashFlowForward::new(&payments, late),
            Err(Error::MalformedSeries(_))
        ));
    }
}
