//! # cl-core
//!
//! Core types, error definitions and numerical settings for curvelab.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – scalar type aliases, the error enum with
//! its `ensure!` macro, and the process-wide tolerance used to guard removable
//! singularities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types, the `ensure!` macro and domain checks.
pub mod errors;

/// Process-wide numerical settings.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{check_finite, check_non_negative, check_positive, check_range, Error, Result};
pub use settings::EPS;
