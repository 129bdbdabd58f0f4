//! # curvelab
//!
//! Closed-form and interpolated curves for fixed-income and derivatives
//! pricing: parametric yield curves (Nelson-Siegel, Svensson, Vasicek),
//! yield ⇄ discount conversions, curves interpolated from market quotes,
//! stationary volatilities, cost of carry, and forward-price curves.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than the individual `cl-*`
//! crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! curvelab = "0.1"
//! ```
//!
//! ```rust
//! use curvelab::forwards::SwapRateForward;
//! use curvelab::termstructures::{Curve, LogLinearDiscount, MarketSeries};
//! use std::sync::Arc;
//!
//! let quotes = MarketSeries::new(0.0, vec![1.0, 2.0, 5.0, 10.0], vec![0.97, 0.94, 0.85, 0.72])
//!     .unwrap();
//! let discount = Arc::new(LogLinearDiscount::new(&quotes).unwrap());
//! let swap = SwapRateForward::new(1.0, 5, discount).unwrap();
//! let rate = swap.value(2.0).unwrap();
//! assert!(rate > 0.0 && rate < 0.1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and `EPS`.
pub use cl_core as core;

/// Shape functions and anchored interpolation.
pub use cl_math as math;

/// Yield, discount, volatility and carry curves.
pub use cl_termstructures as termstructures;

/// Forward-price curves.
pub use cl_forwards as forwards;

/// Commonly used items.
pub mod prelude {
    pub use cl_core::{Error, Real, Result, Time, EPS};
    pub use cl_forwards::{
        CashFlowForward, DividendStockForward, FixedLeg, FixedLegForward, FxForward,
        FxForwardFromFactors, LiborForward, PriceQuote, SwapRateForward,
    };
    pub use cl_termstructures::{
        BivariateCurve, Curve, DiscountFromYield, FlatForward, MarketSeries, SharedCurve,
        YieldFromDiscount, YieldFromPoint,
    };
}
