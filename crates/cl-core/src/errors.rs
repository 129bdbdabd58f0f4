//! Error types for curvelab.
//!
//! Every precondition of a curve builder maps to one of three error kinds.
//! Parameter and series problems are reported when a curve is constructed;
//! domain problems are reported when a curve is evaluated.  Numerically
//! degenerate denominators are never surfaced: curves substitute their
//! analytic limit or an ε-floored value instead.

use crate::Real;
use thiserror::Error;

/// The top-level error type used throughout curvelab.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A model parameter is negative where non-negativity is required, not
    /// finite, or two parameters that must differ are equal.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An evaluation argument lies outside the domain of the curve.
    #[error("{what} {value} is outside the domain [{lower}, {upper}]")]
    OutOfDomain {
        /// Name of the offending argument.
        what: &'static str,
        /// The value that was rejected.
        value: Real,
        /// Lower end of the admissible range.
        lower: Real,
        /// Upper end of the admissible range.
        upper: Real,
    },

    /// Parallel series differ in length, times are not strictly increasing,
    /// or the first time does not lie after the initial time.
    #[error("malformed series: {0}")]
    MalformedSeries(String),
}

/// Shorthand `Result` type used throughout curvelab.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::<kind>(...))` unless `$cond` holds.
///
/// The kind is one of the tuple variants of [`Error`]
/// (`InvalidParameter` or `MalformedSeries`).
///
/// # Example
/// ```
/// use cl_core::{ensure, errors::Error};
/// fn positive(x: f64) -> cl_core::errors::Result<f64> {
///     ensure!(x > 0.0, InvalidParameter, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(
///     positive(-1.0),
///     Err(Error::InvalidParameter("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Check that `lower <= value <= upper`.
///
/// NaN arguments are always rejected.
///
/// # Example
/// ```
/// use cl_core::check_range;
/// assert!(check_range("time", 1.0, 0.0, 2.0).is_ok());
/// assert!(check_range("time", 3.0, 0.0, 2.0).is_err());
/// ```
pub fn check_range(what: &'static str, value: Real, lower: Real, upper: Real) -> Result<()> {
    if value >= lower && value <= upper {
        Ok(())
    } else {
        Err(Error::OutOfDomain {
            what,
            value,
            lower,
            upper,
        })
    }
}

/// Check that `value` is finite and `>= 0`.
pub fn check_non_negative(value: Real, name: &str) -> Result<Real> {
    ensure!(
        value.is_finite() && value >= 0.0,
        InvalidParameter,
        "{name} must be non-negative and finite, got {value}"
    );
    Ok(value)
}

/// Check that `value` is finite and `> 0`.
pub fn check_positive(value: Real, name: &str) -> Result<Real> {
    ensure!(
        value.is_finite() && value > 0.0,
        InvalidParameter,
        "{name} must be positive and finite, got {value}"
    );
    Ok(value)
}

/// Check that `value` is finite (zero and negatives allowed).
pub fn check_finite(value: Real, name: &str) -> Result<Real> {
    ensure!(
        value.is_finite(),
        InvalidParameter,
        "{name} must be finite, got {value}"
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_accepts_both_ends() {
        assert!(check_range("t", 0.0, 0.0, 1.0).is_ok());
        assert!(check_range("t", 1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn range_rejects_outside_and_nan() {
        let err = check_range("time", -0.5, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfDomain {
                what: "time",
                value: -0.5,
                lower: 0.0,
                upper: 1.0
            }
        );
        assert!(check_range("time", Real::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn out_of_domain_display_names_argument() {
        let err = check_range("maturity", 5.0, 1.0, 2.0).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("maturity"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn scalar_checks() {
        assert_eq!(check_non_negative(0.0, "lambda"), Ok(0.0));
        assert!(check_non_negative(-1e-3, "lambda").is_err());
        assert!(check_positive(0.0, "sigma").is_err());
        assert!(check_positive(Real::INFINITY, "sigma").is_err());
        assert!(check_finite(-2.0, "theta").is_ok());
        assert!(matches!(
            check_finite(Real::NAN, "theta"),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
