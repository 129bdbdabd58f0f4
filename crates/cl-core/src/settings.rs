//! Process-wide numerical settings.
//!
//! Every curve in the workspace switches from a closed form to its limiting
//! expression (Taylor series, finite difference or floor) once the relevant
//! quantity falls below [`EPS`].  The threshold is fixed for the whole
//! process so that two curves built from the same inputs always agree.

use crate::Real;

/// Threshold below which removable singularities are evaluated through their
/// limiting expression instead of the closed form.
pub const EPS: Real = 1e-10;

/// Return `x` if it exceeds [`EPS`], otherwise [`EPS`].
///
/// Used wherever a denominator (discount factor, accrual period) may
/// degenerate toward zero.
#[inline]
pub fn floor_eps(x: Real) -> Real {
    if x < EPS {
        EPS
    } else {
        x
    }
}
