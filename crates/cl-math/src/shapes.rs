//! Shape functions shared by the parametric yield, carry and volatility
//! curves.
//!
//! ```text
//! shape1(x) = (1 − e^{−x}) / x
//! shape2(x) = (1 − e^{−x}(1 + x)) / x
//! ```
//!
//! Both have a removable singularity at `x = 0`.  For `x <= EPS` they are
//! evaluated through their Taylor expansions
//! `1 − x/2 + x²/6` and `x/2 − x²/3`, so `shape1(0) = 1` and `shape2(0) = 0`.

use cl_core::{check_range, errors::Result, Real, EPS};

/// `(1 − e^{−x}) / x` for `x >= 0`.
///
/// # Errors
/// Returns [`OutOfDomain`](cl_core::Error::OutOfDomain) if `x < 0` or `x` is NaN.
///
/// # Example
/// ```
/// use cl_math::shape1;
/// assert_eq!(shape1(0.0).unwrap(), 1.0);
/// assert!((shape1(1.0).unwrap() - (1.0 - (-1.0_f64).exp())).abs() < 1e-15);
/// ```
pub fn shape1(x: Real) -> Result<Real> {
    check_range("shape argument", x, 0.0, Real::INFINITY)?;
    if x > EPS {
        // exp_m1 keeps full precision just above the threshold
        Ok(-(-x).exp_m1() / x)
    } else {
        log::trace!("shape1({x}) evaluated by its Taylor expansion");
        Ok(1.0 - x / 2.0 + x * x / 6.0)
    }
}

/// `(1 − e^{−x}(1 + x)) / x` for `x >= 0`.
///
/// # Errors
/// Returns [`OutOfDomain`](cl_core::Error::OutOfDomain) if `x < 0` or `x` is NaN.
pub fn shape2(x: Real) -> Result<Real> {
    check_range("shape argument", x, 0.0, Real::INFINITY)?;
    if x > EPS {
        Ok((-(-x).exp_m1() - x * (-x).exp()) / x)
    } else {
        log::trace!("shape2({x}) evaluated by its Taylor expansion");
        Ok(x / 2.0 - x * x / 3.0)
    }
}

/// `(1 − e^{−x}) / (x / τ)`, i.e. `τ · shape1(x)`.
///
/// With `x = λτ` this is the bond-duration factor `(1 − e^{−λτ}) / λ`, which
/// stays finite (and equals `τ`) as `λ → 0`.
///
/// # Errors
/// Returns [`OutOfDomain`](cl_core::Error::OutOfDomain) if `x < 0` or `tau < 0`.
pub fn shape1_scaled(x: Real, tau: Real) -> Result<Real> {
    check_range("time difference", tau, 0.0, Real::INFINITY)?;
    Ok(tau * shape1(x)?)
}
