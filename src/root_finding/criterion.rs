//! Stopping criteria shared by every root-finding loop.
//!
//! [`StopCriterion`]
//! ├ `AbsoluteStep`  : |xₙ - xₙ₋₁| < tol
//! ├ `RelativeStep`  : |xₙ - xₙ₋₁| / max(|xₙ|, ε) < tol
//! └ `ResidualValue` : |f(xₙ)| < tol
//!
//! ε is [`RELATIVE_GUARD`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Lower bound on the relative-step denominator, avoids dividing by
/// zero when the root sits at 0.
pub const RELATIVE_GUARD: f64 = 1e-10;


/// Which convergence test governs loop termination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopCriterion {
    AbsoluteStep,
    RelativeStep,
    ResidualValue,
}

impl StopCriterion {
    /// Maps the classic numeric selector (`1`, `2`, `3`) onto a criterion.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(StopCriterion::AbsoluteStep),
            2 => Some(StopCriterion::RelativeStep),
            3 => Some(StopCriterion::ResidualValue),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            StopCriterion::AbsoluteStep  => 1,
            StopCriterion::RelativeStep  => 2,
            StopCriterion::ResidualValue => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StopCriterion::AbsoluteStep  => "absolute_step",
            StopCriterion::RelativeStep  => "relative_step",
            StopCriterion::ResidualValue => "residual_value",
        }
    }

    /// Tests the criterion for a step `previous -> current`.
    ///
    /// `residual` is only called for [`StopCriterion::ResidualValue`], so
    /// step criteria never pay for an extra function evaluation.
    #[inline]
    pub(crate) fn is_met<R>(self, tol: f64, current: f64, previous: f64, residual: R) -> bool
    where R: FnOnce() -> f64 {
        match self {
            StopCriterion::AbsoluteStep  => absolute_step(current, previous) < tol,
            StopCriterion::RelativeStep  => relative_step(current, previous) < tol,
            StopCriterion::ResidualValue => residual().abs() < tol,
        }
    }
}
impl std::fmt::Display for StopCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// |current - previous|
#[inline]
pub(crate) fn absolute_step(current: f64, previous: f64) -> f64 {
    (current - previous).abs()
}

/// |current - previous| / max(|current|, [`RELATIVE_GUARD`])
#[inline]
pub(crate) fn relative_step(current: f64, previous: f64) -> f64 {
    (current - previous).abs() / current.abs().max(RELATIVE_GUARD)
}
