//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tolerance` : threshold for the selected stop criterion
//! ├ `max_iter`  : iteration cap, at most this many update steps
//! ├ `digits`    : decimal digits the returned root is rounded to
//! └ `criterion` : [`StopCriterion`] governing termination
//!
//! Every field is caller-supplied. The `RECOMMENDED_*` constants and
//! [`SolverCfg::recommended`] are guidance for callers; the solvers
//! themselves never substitute them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::algorithms::Algorithm;
use super::criterion::StopCriterion;
use super::errors::{RootFindingError, ToleranceError};


pub const RECOMMENDED_TOLERANCE : f64 = 1e-5;
pub const RECOMMENDED_DIGITS    : u32 = 6;


#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverCfg {
    tolerance : f64,
    max_iter  : usize,
    digits    : u32,
    criterion : StopCriterion,
}

impl SolverCfg {
    /// Builds a configuration. Values are checked by [`SolverCfg::validate`],
    /// which every solver runs before iterating.
    #[must_use]
    pub fn new(tolerance: f64, max_iter: usize, digits: u32, criterion: StopCriterion) -> Self {
        Self { tolerance, max_iter, digits, criterion }
    }

    /// Configuration with [`RECOMMENDED_TOLERANCE`], [`RECOMMENDED_DIGITS`]
    /// and [`Algorithm::recommended_max_iter`].
    #[must_use]
    pub fn recommended(algorithm: Algorithm, criterion: StopCriterion) -> Self {
        Self::new(
            RECOMMENDED_TOLERANCE,
            algorithm.recommended_max_iter(),
            RECOMMENDED_DIGITS,
            criterion,
        )
    }

    pub fn with_tolerance(mut self, v: f64)            -> Self { self.tolerance = v; self }
    pub fn with_max_iter (mut self, v: usize)          -> Self { self.max_iter  = v; self }
    pub fn with_digits   (mut self, v: u32)            -> Self { self.digits    = v; self }
    pub fn with_criterion(mut self, v: StopCriterion)  -> Self { self.criterion = v; self }

    #[inline] #[must_use] pub fn tolerance(&self) -> f64           { self.tolerance }
    #[inline] #[must_use] pub fn max_iter (&self) -> usize         { self.max_iter }
    #[inline] #[must_use] pub fn digits   (&self) -> u32           { self.digits }
    #[inline] #[must_use] pub fn criterion(&self) -> StopCriterion { self.criterion }

    /// Checks the configuration, converting failures into the caller's
    /// method error.
    ///
    /// ├ `tolerance` finite and > 0, else [`ToleranceError::InvalidTolerance`]
    /// └ `max_iter` >= 1,            else [`RootFindingError::InvalidMaxIter`]
    pub(crate) fn validate<E>(&self) -> Result<SolverCfg, E>
    where E: From<ToleranceError> + From<RootFindingError> {
        validate_tolerance(self.tolerance)?;
        if self.max_iter == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: self.max_iter }.into());
        }
        Ok(*self)
    }
}


/// `tolerance` must be finite and strictly positive.
pub(crate) fn validate_tolerance(tolerance: f64) -> Result<f64, ToleranceError> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(ToleranceError::InvalidTolerance { got: tolerance });
    }
    Ok(tolerance)
}
