//! Rounding of final root estimates.

/// Magnitude from which every `f64` is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52


/// Rounds `x` to `digits` decimal places, ties to even.
///
/// The exact binary value of `x` is rounded, not `x * 10^digits`, so a
/// stored value just past a decimal tie rounds away from it.
///
/// Returns `x` unchanged when it is non-finite, or when scaling by
/// `10^digits` leaves no fractional part to round (so the result is
/// always a fixed point: `round_to_digits(r, d) == r` for any returned `r`).
pub fn round_to_digits(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(digits.min(i32::MAX as u32) as i32);
    if !scale.is_finite() {
        return x;
    }
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return x;
    }
    format!("{:.*}", digits as usize, x).parse().unwrap_or(x)
}
