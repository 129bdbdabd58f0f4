//! # cl-termstructures
//!
//! Yield, discount, volatility and cost-of-carry curves: closed-form
//! parametric models, conversions between yields and discount factors, and
//! curves interpolated from market quotes.
//!
//! Every curve implements [`Curve`]; curves built on other curves hold them
//! as [`SharedCurve`].
//!
//! ```
//! use cl_termstructures::{Curve, NelsonSiegelParams, NelsonSiegelYield, YieldFromDiscount};
//! use std::sync::Arc;
//!
//! let params = NelsonSiegelParams { c0: 0.02, c1: 0.04, c2: 0.06, lambda: 0.05 };
//! let yields = NelsonSiegelYield::new(params, 0.0).unwrap();
//! let discount = Arc::new(yields.into_discount());
//! let back = YieldFromDiscount::new(discount, 0.0).unwrap();
//! assert!((back.value(5.0).unwrap() - yields.value(5.0).unwrap()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Curve` — base trait for all curves, plus `BivariateCurve` and `FnCurve`.
pub mod term_structure;

/// `MarketSeries` — validated market quotes anchored at an initial time.
pub mod market_series;

/// Yield ⇄ discount conversions.
pub mod conversion;

/// `FlatForward` — constant-rate discount curve.
pub mod flat_forward;

/// Nelson-Siegel and Svensson yield curves and single shape-term curves.
pub mod nelson_siegel;

/// Vasicek short-rate model yield curve.
pub mod vasicek;

/// Black cost-of-carry, carry rates of forward prices, and carry-interpolated
/// forward curves.
pub mod carry;

/// Black and Hull-White stationary volatilities and volatility from
/// variance.
pub mod volatility;

/// Discount curves interpolated from market discount factors.
pub mod interpolated_discount_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use carry::{BlackCarry, CarryInterpolatedForward, CostOfCarry, OrnsteinUhlenbeckParams};
pub use conversion::{DiscountFromYield, YieldFromDiscount, YieldFromPoint};
pub use flat_forward::FlatForward;
pub use interpolated_discount_curve::{LogLinearDiscount, YieldInterpolatedDiscount};
pub use market_series::MarketSeries;
pub use nelson_siegel::{
    NelsonSiegelParams, NelsonSiegelYield, Shape, SvenssonParams, SvenssonYield, YieldShape,
};
pub use term_structure::{BivariateCurve, Curve, FnCurve, SharedCurve};
pub use vasicek::{VasicekParams, VasicekYield};
pub use volatility::{
    BlackVolatility, HullWhiteTenorVolatility, HullWhiteVolatility, LinearVarianceVolatility,
    VolatilityFromVariance, VolatilityParams,
};
