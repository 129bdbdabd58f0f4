//! `MarketSeries` — validated `(time, value)` quotes anchored at an initial
//! time.
//!
//! Times must be finite, strictly increasing and strictly after the initial
//! time; values must be finite.  Both vectors are stored behind `Arc` and are
//! shared, not copied, by every curve built on the series.

use cl_core::{errors::Result, Real, Time};
use cl_math::interpolations::check_abscissae;
use std::sync::Arc;

/// An ordered series of market quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    initial_time: Time,
    times: Arc<[Time]>,
    values: Arc<[Real]>,
}

impl MarketSeries {
    /// Validate and wrap parallel `times` / `values`.
    ///
    /// # Errors
    /// Returns [`MalformedSeries`](cl_core::Error::MalformedSeries) if the
    /// lengths differ, the series is empty, times are not strictly increasing
    /// or do not start after `initial_time`, or a value is not finite.
    ///
    /// # Example
    /// ```
    /// use cl_termstructures::MarketSeries;
    /// let s = MarketSeries::new(0.0, vec![0.5, 1.0], vec![0.98, 0.95]).unwrap();
    /// assert_eq!(s.len(), 2);
    /// assert!(MarketSeries::new(0.0, vec![0.0, 1.0], vec![1.0, 0.95]).is_err());
    /// ```
    pub fn new(
        initial_time: Time,
        times: impl Into<Arc<[Time]>>,
        values: impl Into<Arc<[Real]>>,
    ) -> Result<Self> {
        let times = times.into();
        let values = values.into();
        cl_core::ensure!(
            times.len() == values.len(),
            MalformedSeries,
            "times and values must have the same length, got {} and {}",
            times.len(),
            values.len()
        );
        check_abscissae(initial_time, &times)?;
        cl_core::ensure!(
            values.iter().all(|v| v.is_finite()),
            MalformedSeries,
            "values must be finite"
        );
        Ok(Self {
            initial_time,
            times,
            values,
        })
    }

    /// The anchor time `t0`.
    pub fn initial_time(&self) -> Time {
        self.initial_time
    }

    /// The quote times.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// The quoted values.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// A shared handle to the quote times.
    pub fn shared_times(&self) -> Arc<[Time]> {
        Arc::clone(&self.times)
    }

    /// A shared handle to the quoted values.
    pub fn shared_values(&self) -> Arc<[Real]> {
        Arc::clone(&self.values)
    }

    /// The number of quotes.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`: construction rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The last quote time.
    pub fn last_time(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    /// Iterate over `(time, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Time, Real)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}
