//! Forward par swap rate.

use cl_core::{check_positive, errors::Result, Rate, Real, Time};
use cl_termstructures::{Curve, SharedCurve};

/// Forward par rate of a swap starting at `t` with `n` payments every `δ`:
///
/// ```text
/// S(t) = (D(t) − D(t + nδ)) / (δ·Σ_{i=1..n} D(t + iδ))
/// ```
#[derive(Debug, Clone)]
pub struct SwapRateForward {
    period: Time,
    payments: usize,
    discount: SharedCurve,
}

impl SwapRateForward {
    /// Build the curve.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless the
    /// period is positive and there is at least one payment.
    pub fn new(period: Time, payments: usize, discount: SharedCurve) -> Result<Self> {
        check_positive(period, "period")?;
        cl_core::ensure!(
            payments >= 1,
            InvalidParameter,
            "a swap needs at least one payment"
        );
        log::debug!("forward swap rate, period = {period}, {payments} payments");
        Ok(Self {
            period,
            payments,
            discount,
        })
    }

    /// Length `nδ` of the swap.
    pub fn tenor(&self) -> Time {
        self.payments as Real * self.period
    }
}

impl Curve for SwapRateForward {
    fn initial_time(&self) -> Time {
        self.discount.initial_time()
    }

    fn max_time(&self) -> Time {
        self.discount.max_time() - self.tenor()
    }

    fn value_impl(&self, t: Time) -> Result<Rate> {
        // t <= max_time() may still put t + nδ one ulp past the discount curve
        let last = self.discount.max_time();
        let mut annuity = 0.0;
        for i in 1..=self.payments {
            annuity += self.discount.value((t + i as Real * self.period).min(last))?;
        }
        let start = self.discount.value(t)?;
        let end = self.discount.value((t + self.tenor()).min(last))?;
        Ok((start - end) / (self.period * annuity))
    }
}
