//! Forward price of a stock paying discrete dividends.

use cl_core::{check_positive, errors::Result, Price, Real, Time};
use cl_termstructures::{Curve, MarketSeries, SharedCurve};

/// Forward-price curve of a dividend-paying stock.
///
/// ```text
/// F(t) = S0/D(t) − Σ_{t_i <= t} d_i·D(t_i)/D(t)
/// ```
///
/// The curve is defined up to the last dividend time.
#[derive(Debug, Clone)]
pub struct DividendStockForward {
    spot: Price,
    dividends: MarketSeries,
    discount: SharedCurve,
}

impl DividendStockForward {
    /// Build the curve from the spot price and the dividend schedule.
    ///
    /// # Errors
    /// [`InvalidParameter`](cl_core::Error::InvalidParameter) unless the spot
    /// is positive; [`MalformedSeries`](cl_core::Error::MalformedSeries) if
    /// the schedule does not fit inside the discount curve's domain.
    pub fn new(spot: Price, dividends: &MarketSeries, discount: SharedCurve) -> Result<Self> {
        check_positive(spot, "spot")?;
        cl_core::ensure!(
            dividends.initial_time() >= discount.initial_time()
                && dividends.last_time() <= discount.max_time(),
            MalformedSeries,
            "dividend schedule ({}, {}] outside the discount curve's domain [{}, {}]",
            dividends.initial_time(),
            dividends.last_time(),
            discount.initial_time(),
            discount.max_time()
        );
        log::debug!(
            "dividend stock forward, spot = {spot}, {} dividends",
            dividends.len()
        );
        Ok(Self {
            spot,
            dividends: dividends.clone(),
            discount,
        })
    }

    /// The spot price.
    pub fn spot(&self) -> Price {
        self.spot
    }
}

impl Curve for DividendStockForward {
    fn initial_time(&self) -> Time {
        self.dividends.initial_time()
    }

    fn max_time(&self) -> Time {
        self.dividends.last_time()
    }

    fn value_impl(&self, t: Time) -> Result<Price> {
        let paid = self.dividends.times().partition_point(|&ti| ti <= t);
        let mut paid_value: Real = 0.0;
        for (time, dividend) in self.dividends.iter().take(paid) {
            paid_value += dividend * self.discount.value(time)?;
        }
        Ok((self.spot - paid_value) / self.discount.value(t)?)
    }
}
