//! # cl-math
//!
//! Mathematical primitives shared by the curve builders: the two
//! removable-singularity shape functions and the anchored 1D interpolation
//! schemes (linear and log-linear) with their bracket search.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Shape functions `(1 − e^{−x})/x` and `(1 − e^{−x}(1 + x))/x`.
pub mod shapes;

/// 1D interpolation schemes anchored at an initial point.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{
    first_not_less, Interpolation1D, LinearInterpolation, LogLinearInterpolation,
};
pub use shapes::{shape1, shape1_scaled, shape2};
