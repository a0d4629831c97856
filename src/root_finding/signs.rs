//! Sign utilities for bracketing root-finding algorithms.
//! - `opposite_sign` : `true` if `x * y < 0`
//! - `same_sign`     : `true` if `x * y > 0`
//!
//! Compared by sign rather than by forming the product, so tiny or huge
//! values cannot underflow/overflow the test. A zero has no sign.

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` are nonzero with the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}
