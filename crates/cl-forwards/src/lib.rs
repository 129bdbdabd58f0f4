//! # cl-forwards
//!
//! Forward-price curves derived from discount curves: fixed cash-flow
//! schedules, coupon bonds and annuities, dividend-paying stocks, par swap
//! rates, FX forwards and forward LIBOR.
//!
//! Every curve takes its discount curve(s) as
//! [`SharedCurve`](cl_termstructures::SharedCurve) and implements
//! [`Curve`](cl_termstructures::Curve).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Forward price of a fixed payment schedule.
pub mod cash_flow;

/// Coupon-bond and annuity forwards.
pub mod fixed_leg;

/// Dividend-paying stock forward.
pub mod stock;

/// Forward par swap rate.
pub mod swap_rate;

/// FX forwards.
pub mod fx;

/// Forward LIBOR.
pub mod libor;

pub use cash_flow::CashFlowForward;
pub use fixed_leg::{FixedLeg, FixedLegForward, PriceQuote};
pub use fx::{FxForward, FxForwardFromFactors};
pub use libor::LiborForward;
pub use stock::DividendStockForward;
pub use swap_rate::SwapRateForward;
